//! Error types for plan validation and projection

use thiserror::Error;

/// Errors surfaced by the projection engine
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    /// Monthly contribution must be strictly positive
    #[error("monthly contribution must be positive, got {0}")]
    InvalidContribution(f64),

    /// Duration must be at least one month
    #[error("duration must be at least 1 month, got {0}")]
    InvalidDuration(u32),

    /// Goal amount, when supplied, must be positive
    #[error("goal amount must be positive, got {0}")]
    InvalidGoal(f64),

    /// The rate/duration combination left floating-point range
    #[error("projection produced a non-finite value ({value}); inputs exceed representable range")]
    NonFiniteResult {
        /// The offending intermediate value
        value: f64,
    },
}
