//! Error types for the dice engine.

/// Errors that can occur while drawing numbers or parsing formulas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The upper bound of a range is below its lower bound.
    #[error("invalid range: max {max} is below min {min}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// A dice formula could not be parsed.
    #[error("invalid dice formula: {0}")]
    Parse(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
