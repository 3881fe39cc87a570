//! Core type definitions.
//!
//! This module provides:
//! - [`time`]: Date handling, day-count conventions, business-day grids
//! - [`market`]: Spot quote series and quote-side selection
//! - [`cashflow`]: Cashflow schedules with premium augmentation
//! - [`config`]: The immutable valuation configuration
//! - [`error`]: Structured error types shared across the crate

pub mod cashflow;
pub mod config;
pub mod error;
pub mod market;
pub mod time;

pub use cashflow::CashflowSchedule;
pub use config::ValuationConfig;
pub use error::{ConfigError, DateError, MarketDataError, ScheduleError, SolverError};
pub use market::{QuoteSide, SpotSeries};
pub use time::{business_day_range, Date, DayCount};
