//! Simulation error types.

use thiserror::Error;

/// Fail-fast validation errors from the path simulator.
///
/// Every variant is raised before any random draw happens; a failed
/// simulation never yields partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Path count must be positive.
    #[error("n_paths must be positive, got {n_paths}")]
    InvalidPathCount {
        /// The offending path count
        n_paths: usize,
    },

    /// Volatility must be non-negative.
    #[error("sigma must be non-negative, got {sigma}")]
    InvalidVolatility {
        /// The offending volatility
        sigma: f64,
    },

    /// Steps-per-year must be positive.
    #[error("steps_per_year must be positive")]
    InvalidStepsPerYear,

    /// The business-day grid needs at least two points.
    #[error("Date range must contain at least 2 business days, got {n_days}")]
    DateRangeTooShort {
        /// Number of business days found
        n_days: usize,
    },

    /// Scheme is recognised but not implemented.
    #[error("{scheme} scheme not implemented; use \"exact\" instead")]
    SchemeNotImplemented {
        /// Name of the unimplemented scheme
        scheme: &'static str,
    },

    /// Scheme string did not match any known selector.
    #[error("Unknown scheme \"{got}\"; valid schemes: exact, em, milstein")]
    UnknownScheme {
        /// The unrecognised input
        got: String,
    },
}
