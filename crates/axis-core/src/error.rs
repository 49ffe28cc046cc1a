// File: crates/axis-core/src/error.rs
// Summary: Library error taxonomy for contract violations at the API boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AxisError {
    /// A wire bucket size outside the recognized set {1, 7, 30, 90, 365}.
    #[error("unrecognized granularity: {0} days")]
    InvalidGranularity(i64),

    /// A zero count, or an input outside the supported calendar range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

pub type Result<T> = std::result::Result<T, AxisError>;
