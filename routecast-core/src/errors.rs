//! Error Types for Caller Contract Violations
//!
//! The model never signals errors for physical edge cases: nighttime zero
//! solar gain, the laminar-flow convective floor, and the degenerate
//! zero-temperature lapse division are all regular branches. The only
//! failures are malformed inputs the data-retrieval collaborator was
//! supposed to guard: non-finite numbers and out-of-domain fields such as
//! negative relative humidity.
//!
//! Errors are small, `Copy`, and heap-free (`&'static str` payloads only)
//! so they can cross the evaluation hot path without allocation.

use thiserror_no_std::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Caller contract violations - kept small and allocation-free.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Field is NaN or infinite.
    #[error("Field '{field}' is not a finite number")]
    InvalidInput {
        /// Name of the offending sample field.
        field: &'static str,
    },

    /// Field outside its documented domain.
    #[error("Field '{field}' value {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending sample field.
        field: &'static str,
        /// The value supplied by the caller.
        value: f32,
        /// Minimum acceptable value.
        min: f32,
        /// Maximum acceptable value.
        max: f32,
    },
}
