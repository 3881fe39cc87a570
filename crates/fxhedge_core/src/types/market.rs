//! Market data containers.
//!
//! This module provides:
//! - [`QuoteSide`]: bid/mid/ask selection
//! - [`SpotSeries`]: a date-indexed series of FX spot quotes
//!
//! The series is supplied by the data-loading collaborator already cleaned
//! of rows with missing mid quotes; accessors here additionally filter
//! non-finite values so downstream estimation only sees usable samples.

use super::error::MarketDataError;
use super::time::Date;

/// Which side of the quote to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSide {
    /// Bid price.
    Bid,
    /// Mid price (default for estimation).
    #[default]
    Mid,
    /// Ask price.
    Ask,
}

/// Date-indexed FX spot observations with bid/mid/ask columns.
///
/// Invariant: the date index is strictly increasing and every column has
/// the same length as the index. Enforced at construction.
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::market::{QuoteSide, SpotSeries};
/// use fxhedge_core::types::time::Date;
///
/// let dates = vec![
///     Date::from_ymd(2025, 7, 30).unwrap(),
///     Date::from_ymd(2025, 7, 31).unwrap(),
/// ];
/// let series = SpotSeries::new(
///     dates,
///     vec![1.1410, 1.1420],
///     vec![1.1412, 1.1422],
///     vec![1.1414, 1.1424],
/// )
/// .unwrap();
///
/// assert_eq!(series.len(), 2);
/// let (_, spot) = series
///     .latest_quote(Date::from_ymd(2025, 8, 1).unwrap(), QuoteSide::Mid)
///     .unwrap();
/// assert!((spot - 1.1422).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpotSeries {
    dates: Vec<Date>,
    bid: Vec<f64>,
    mid: Vec<f64>,
    ask: Vec<f64>,
}

impl SpotSeries {
    /// Creates a new spot series from parallel columns.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::UnsortedDates` if the index is not strictly
    ///   increasing
    /// - `MarketDataError::LengthMismatch` if any column length differs
    ///   from the index length
    pub fn new(
        dates: Vec<Date>,
        bid: Vec<f64>,
        mid: Vec<f64>,
        ask: Vec<f64>,
    ) -> Result<Self, MarketDataError> {
        for column in [&bid, &mid, &ask] {
            if column.len() != dates.len() {
                return Err(MarketDataError::LengthMismatch {
                    dates: dates.len(),
                    values: column.len(),
                });
            }
        }
        if let Some(index) = dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MarketDataError::UnsortedDates { index: index + 1 });
        }
        Ok(Self {
            dates,
            bid,
            mid,
            ask,
        })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the date index.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the raw column for the requested quote side.
    pub fn quotes(&self, side: QuoteSide) -> &[f64] {
        match side {
            QuoteSide::Bid => &self.bid,
            QuoteSide::Mid => &self.mid,
            QuoteSide::Ask => &self.ask,
        }
    }

    /// Returns the requested column with non-finite values dropped,
    /// preserving date order.
    ///
    /// This is the series consumed by GBM parameter estimation.
    pub fn clean_quotes(&self, side: QuoteSide) -> Vec<f64> {
        self.quotes(side)
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect()
    }

    /// Returns the latest finite quote at or before `as_of`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::NoQuoteAvailable` if every observation is after
    /// `as_of` or no finite value exists up to it.
    pub fn latest_quote(
        &self,
        as_of: Date,
        side: QuoteSide,
    ) -> Result<(Date, f64), MarketDataError> {
        let values = self.quotes(side);
        self.dates
            .iter()
            .zip(values)
            .rev()
            .find(|(d, v)| **d <= as_of && v.is_finite())
            .map(|(d, v)| (*d, *v))
            .ok_or(MarketDataError::NoQuoteAvailable {
                date: as_of.to_string(),
            })
    }
}
