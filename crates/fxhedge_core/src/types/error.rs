//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `MarketDataError`: Errors from market data containers
//! - `ScheduleError`: Errors from cashflow schedule construction
//! - `ConfigError`: Errors from configuration loading and validation
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g. February 30th)
/// - `ParseError`: Failed to parse a date string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
        /// Day component
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Failed to parse date: {0}")]
    ParseError(String),
}

/// Market data container errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Date index is not strictly increasing.
    #[error("Spot series dates must be strictly increasing (violation at row {index})")]
    UnsortedDates {
        /// Row index of the first out-of-order date
        index: usize,
    },

    /// Column lengths do not match the date index.
    #[error("Column length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates
        dates: usize,
        /// Number of values in the offending column
        values: usize,
    },

    /// No quote available at or before the requested date.
    #[error("No quote at or before {date}")]
    NoQuoteAvailable {
        /// The requested date (ISO 8601)
        date: String,
    },
}

/// Cashflow schedule errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Duplicate date within a currency column.
    #[error("Duplicate cashflow date: {date}")]
    DuplicateDate {
        /// The duplicated date (ISO 8601)
        date: String,
    },

    /// Schedule has no rows.
    #[error("Cashflow schedule must have at least one row")]
    Empty,

    /// A premium was supplied without an analysis date to anchor it.
    #[error("analysis_date must be provided when premium_usd is supplied")]
    MissingAnalysisDate,
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter outside its valid range.
    #[error("Invalid configuration: {message}")]
    InvalidParameter {
        /// Description of the violated constraint
        message: String,
    },

    /// Failed to deserialise a TOML document.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Root-finding solver errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Bracket endpoints do not straddle a root.
    #[error("No root bracketed in [{a}, {b}]: f(a) and f(b) have the same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}
