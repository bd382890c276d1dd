//! Dice used by particular games: fudge dice, d66, d666, and the
//! mathematician's die.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{clamp_count, roll_die};
use crate::random::{pick, uniform_int};

/// Faces of the mathematician's die.
pub const MATHEMATICIAN_FACES: &[&str] = &["0", "1", "i", "e", "φ", "π"];

/// Roll `count` fudge dice (each -1, 0, or +1) and return the sum.
///
/// The result always lies in `[-count, count]` after clamping.
pub fn fudge<R: Rng + ?Sized>(rng: &mut R, count: u32) -> i64 {
    (0..clamp_count(count))
        .map(|_| uniform_int(rng, -1, 1).unwrap_or(0))
        .sum()
}

/// Roll a d66: a tens die and a units die, each a d6.
pub fn d66<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    roll_die(rng, 6) * 10 + roll_die(rng, 6)
}

/// Outcome of a d666 roll (two d6 summed for the check, one d6 for the degree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum D666Roll {
    /// All three dice showed 1.
    DivineIntervention,
    /// All three dice showed 6.
    InfernalIntervention,
    /// Any other combination.
    Check {
        /// Sum of the first two dice.
        check: u32,
        /// The third die.
        degree: u32,
    },
}

impl D666Roll {
    /// Classify three d6 results.
    pub fn from_dice(first: u32, second: u32, third: u32) -> Self {
        match (first, second, third) {
            (1, 1, 1) => Self::DivineIntervention,
            (6, 6, 6) => Self::InfernalIntervention,
            _ => Self::Check {
                check: first + second,
                degree: third,
            },
        }
    }
}

impl std::fmt::Display for D666Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivineIntervention => write!(f, "divine intervention"),
            Self::InfernalIntervention => write!(f, "infernal intervention"),
            Self::Check { check, degree } => write!(f, "{check}:{degree}"),
        }
    }
}

/// Roll a d666.
pub fn d666<R: Rng + ?Sized>(rng: &mut R) -> D666Roll {
    let first = roll_die(rng, 6);
    let second = roll_die(rng, 6);
    let third = roll_die(rng, 6);
    D666Roll::from_dice(first, second, third)
}

/// Roll the mathematician's die.
pub fn d_mathematicians<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, MATHEMATICIAN_FACES).copied().unwrap_or("0")
}
