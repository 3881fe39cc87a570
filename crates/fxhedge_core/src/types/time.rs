//! Time types and day-count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around `chrono::NaiveDate`
//! - `DayCount`: Day-count conventions for year-fraction calculations
//! - `business_day_range`: Weekday-only date grids for simulation axes
//!
//! The engine uses ACT/365 throughout: elapsed calendar days divided by
//! 365, applied uniformly to discounting, forwards, and option tenors.
//!
//! # Examples
//!
//! ```
//! use fxhedge_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2025, 8, 1).unwrap();
//! let end = Date::from_ymd(2026, 8, 1).unwrap();
//!
//! let yf = DayCount::Act365.year_fraction(start, end);
//! assert!((yf - 1.0).abs() < 0.01);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic for
/// financial calculations.
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::time::Date;
///
/// let date = Date::from_ymd(2025, 10, 1).unwrap();
/// assert_eq!(date.to_string(), "2025-10-01");
///
/// let parsed: Date = "2025-10-01".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2025, 8, 1).unwrap();
/// assert_eq!(date - start, 61);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    ///
    /// Returns `DateError::InvalidDate` for impossible dates
    /// (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `DateError::ParseError` if the string is not a valid date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying `NaiveDate`.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` calendar days after `self`.
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns `true` if the date falls on Monday through Friday.
    pub fn is_business_day(self) -> bool {
        !matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the year component.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days between two dates.
    ///
    /// Positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day-count convention (year-fraction convention).
///
/// # Variants
/// - `Act365`: actual days / 365.0 (standard for derivatives)
/// - `Act360`: actual days / 360.0 (money markets)
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum DayCount {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    Act365,

    /// Actual/360: actual_days / 360.0
    Act360,
}

impl DayCount {
    /// Returns the industry-standard convention name.
    pub fn name(self) -> &'static str {
        match self {
            DayCount::Act365 => "ACT/365",
            DayCount::Act360 => "ACT/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` precedes `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxhedge_core::types::time::{Date, DayCount};
    ///
    /// let start = Date::from_ymd(2025, 8, 1).unwrap();
    /// let end = Date::from_ymd(2025, 10, 1).unwrap();
    /// let yf = DayCount::Act365.year_fraction(start, end);
    /// assert!((yf - 61.0 / 365.0).abs() < 1e-12);
    /// ```
    pub fn year_fraction(self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCount::Act365 => days / 365.0,
            DayCount::Act360 => days / 360.0,
        }
    }
}

/// Generates the business-day grid between `start` and `end`, inclusive.
///
/// Business days are Monday through Friday; no holiday calendar is
/// applied. Returns an empty vector when `end < start`.
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::time::{business_day_range, Date};
///
/// // 2025-08-01 is a Friday; the following Monday is 2025-08-04.
/// let start = Date::from_ymd(2025, 8, 1).unwrap();
/// let end = Date::from_ymd(2025, 8, 4).unwrap();
/// let grid = business_day_range(start, end);
/// assert_eq!(grid.len(), 2);
/// ```
pub fn business_day_range(start: Date, end: Date) -> Vec<Date> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        if current.is_business_day() {
            dates.push(current);
        }
        current = current.add_days(1);
    }
    dates
}
