//! Success pools.
//!
//! Roll a handful of same-sided dice. Each die at or above the threshold
//! scores a success; each die showing exactly 1 takes one away, so the
//! net count can go negative. A pool with fewer than one net success is a
//! failure, or a fumble when no die met the threshold at all.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{clamp_count, clamp_sides, roll_die};

/// How a success pool turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolOutcome {
    /// At least one net success.
    Success {
        /// Net number of successes.
        successes: u32,
    },
    /// Some die met the threshold, but ones cancelled every success.
    Failure,
    /// No die met the threshold.
    Fumble,
}

impl std::fmt::Display for PoolOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { successes } => write!(f, "{successes} successes"),
            Self::Failure => write!(f, "failure"),
            Self::Fumble => write!(f, "fumble!"),
        }
    }
}

/// Configuration for a success pool roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessPool {
    /// Faces per die (clamped to at least 2 when rolled).
    pub sides: u32,
    /// Number of dice (clamped to at least 1 when rolled).
    pub size: u32,
    /// Roll at or above this value to score a success.
    pub threshold: u32,
}

impl SuccessPool {
    /// A pool of `size` dice with `sides` faces, succeeding at `threshold` or above.
    pub fn new(sides: u32, size: u32, threshold: u32) -> Self {
        Self {
            sides,
            size,
            threshold,
        }
    }

    /// Count net successes and classify a set of die results.
    pub fn resolve(&self, rolls: &[u32]) -> (i64, PoolOutcome) {
        let mut net: i64 = 0;
        let mut any_hit = false;

        for &value in rolls {
            if value >= self.threshold {
                net += 1;
                any_hit = true;
            } else if value == 1 {
                net -= 1;
            }
        }

        let outcome = if net >= 1 {
            PoolOutcome::Success {
                successes: u32::try_from(net).unwrap_or(u32::MAX),
            }
        } else if any_hit {
            PoolOutcome::Failure
        } else {
            PoolOutcome::Fumble
        };
        (net, outcome)
    }

    /// Roll the pool and keep every die result.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> PoolRoll {
        let sides = clamp_sides(self.sides);
        let rolls: Vec<u32> = (0..clamp_count(self.size))
            .map(|_| roll_die(rng, sides))
            .collect();
        let (net_successes, outcome) = self.resolve(&rolls);
        tracing::debug!(?rolls, net_successes, %outcome, "resolved success pool");
        PoolRoll {
            pool: *self,
            rolls,
            net_successes,
            outcome,
        }
    }
}

/// The result of rolling a [`SuccessPool`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRoll {
    /// The pool that was rolled.
    pub pool: SuccessPool,
    /// Individual die results, in roll order.
    pub rolls: Vec<u32>,
    /// Successes minus ones. May be zero or negative.
    pub net_successes: i64,
    /// Classification of the roll.
    pub outcome: PoolOutcome,
}

impl std::fmt::Display for PoolRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for value in &self.rolls {
            write!(f, "{value}, ")?;
        }
        write!(f, "{}", self.outcome)
    }
}

/// Roll `pool_size` dice with `sides` faces against `threshold`.
pub fn success_pool<R: Rng + ?Sized>(
    rng: &mut R,
    sides: u32,
    pool_size: u32,
    threshold: u32,
) -> PoolRoll {
    SuccessPool::new(sides, pool_size, threshold).roll(rng)
}

/// Count hits in a pool of d6, where anything above 3 is a hit.
pub fn shadowrun_pool<R: Rng + ?Sized>(rng: &mut R, pool_size: u32) -> u32 {
    let hits = (0..clamp_count(pool_size))
        .filter(|_| roll_die(rng, 6) > 3)
        .count();
    u32::try_from(hits).unwrap_or(u32::MAX)
}
