//! Errors raised while constructing game values.
//!
//! Commands that arrive in the wrong phase are not errors: the engine reports
//! them as [`crate::engine::IgnoreReason`] and leaves the model untouched.
//! The variants here cover values that can never enter the model at all.

/// Construction errors for game-core value types.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("unsupported match format: best of {max_sets} (expected 1, 3 or 5)")]
    InvalidMatchFormat { max_sets: u8 },
}
