//! Yes/no probability checks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::roll;

/// The denominator a probability threshold is expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChanceScale {
    /// Out of 100.
    #[default]
    Percent,
    /// Out of 1000.
    Permille,
    /// Out of 10000.
    Permyriad,
}

impl ChanceScale {
    /// Number of faces on the die rolled for this scale.
    pub fn sides(self) -> u32 {
        match self {
            Self::Percent => 100,
            Self::Permille => 1000,
            Self::Permyriad => 10000,
        }
    }

    /// Threshold used when none is given: even odds.
    pub fn default_threshold(self) -> u32 {
        self.sides() / 2
    }

    /// Parse a scale name such as `percent`, `%`, `permille`, or `permyriad`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "percent" | "%" | "100" => Some(Self::Percent),
            "permille" | "‰" | "1000" => Some(Self::Permille),
            "permyriad" | "‱" | "10000" => Some(Self::Permyriad),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChanceScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent => write!(f, "percent"),
            Self::Permille => write!(f, "permille"),
            Self::Permyriad => write!(f, "permyriad"),
        }
    }
}

/// Roll one die for `scale` and report whether it came up at or under
/// `threshold` (the scale's default when `None`).
pub fn probability_check<R: Rng + ?Sized>(
    rng: &mut R,
    scale: ChanceScale,
    threshold: Option<u32>,
) -> bool {
    let threshold = threshold.unwrap_or_else(|| scale.default_threshold());
    roll(rng, 1, scale.sides()) <= u64::from(threshold)
}

/// Percent chance; defaults to 50.
pub fn percent_chance<R: Rng + ?Sized>(rng: &mut R, threshold: Option<u32>) -> bool {
    probability_check(rng, ChanceScale::Percent, threshold)
}

/// Per-mille chance; defaults to 500.
pub fn permille_chance<R: Rng + ?Sized>(rng: &mut R, threshold: Option<u32>) -> bool {
    probability_check(rng, ChanceScale::Permille, threshold)
}

/// Per-myriad chance; defaults to 5000.
pub fn permyriad_chance<R: Rng + ?Sized>(rng: &mut R, threshold: Option<u32>) -> bool {
    probability_check(rng, ChanceScale::Permyriad, threshold)
}

/// X-in-6 chance; defaults to 3.
pub fn chance_in_6<R: Rng + ?Sized>(rng: &mut R, threshold: Option<u32>) -> bool {
    roll(rng, 1, 6) <= u64::from(threshold.unwrap_or(3))
}

/// X-in-20 chance; defaults to 10.
pub fn chance_in_20<R: Rng + ?Sized>(rng: &mut R, threshold: Option<u32>) -> bool {
    roll(rng, 1, 20) <= u64::from(threshold.unwrap_or(10))
}

/// Flip a coin: `true` when a d2 shows 1.
pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    roll(rng, 1, 2) == 1
}
