//! Dice engine for knucklebones.
//!
//! Provides uniform integer draws and random picks over any collection,
//! a dice-formula parser (`3d6+2`, `d20`, `2d10x5-1`), success pools,
//! probability checks, fudge dice, and a handful of game-specific dice.
//!
//! Every function takes its random source explicitly, so a seeded
//! [`rand::rngs::StdRng`] gives reproducible results.

pub mod chance;
pub mod config;
pub mod dice;
pub mod error;
pub mod formula;
pub mod pool;
pub mod random;

pub use chance::{ChanceScale, flip, probability_check};
pub use config::RollerConfig;
pub use dice::{D666Roll, d66, d666, d_mathematicians, fudge, multiple, roll};
pub use error::{DiceError, DiceResult};
pub use formula::{
    DiceFormula, FormulaRoll, ModifierSign, MultiplierOp, PARSE_ERROR_MESSAGE, RollOutput,
    parse_formula,
};
pub use pool::{PoolOutcome, PoolRoll, SuccessPool, shadowrun_pool, success_pool};
pub use random::{Pickable, pick, uniform_int};
