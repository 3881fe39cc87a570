//! Cashflow schedules.
//!
//! A [`CashflowSchedule`] holds the contractual EUR cashflows of the
//! private-credit stream, ordered by date, optionally augmented with a
//! single upfront USD premium row (the option hedge premium paid at the
//! analysis date). The EUR and USD columns keep their dates unique
//! independently of each other.

use super::error::ScheduleError;
use super::time::Date;

/// Ordered sequence of (date, EUR amount) cashflows with an optional
/// upfront USD premium row.
///
/// Rows are sorted by date at construction; duplicate dates within the
/// EUR column are rejected.
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::cashflow::CashflowSchedule;
/// use fxhedge_core::types::time::Date;
///
/// let schedule = CashflowSchedule::private_credit_default();
/// assert_eq!(schedule.len(), 5);
/// assert_eq!(schedule.amounts_eur()[0], -10_000_000.0);
///
/// let analysis = Date::from_ymd(2025, 8, 1).unwrap();
/// let hedged = schedule
///     .with_premium(Some(250_000.0), Some(analysis))
///     .unwrap();
/// assert_eq!(hedged.premium(), Some((analysis, 250_000.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowSchedule {
    dates: Vec<Date>,
    amounts_eur: Vec<f64>,
    /// Upfront USD premium: (payment date, positive premium amount).
    premium: Option<(Date, f64)>,
}

impl CashflowSchedule {
    /// Creates a schedule from (date, EUR amount) rows.
    ///
    /// Rows are sorted chronologically.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::Empty` if `rows` is empty
    /// - `ScheduleError::DuplicateDate` if two rows share a date
    pub fn new(mut rows: Vec<(Date, f64)>) -> Result<Self, ScheduleError> {
        if rows.is_empty() {
            return Err(ScheduleError::Empty);
        }
        rows.sort_by_key(|(date, _)| *date);
        if let Some(w) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(ScheduleError::DuplicateDate {
                date: w[0].0.to_string(),
            });
        }
        let (dates, amounts_eur) = rows.into_iter().unzip();
        Ok(Self {
            dates,
            amounts_eur,
            premium: None,
        })
    }

    /// The five-row private-credit stream used throughout the analysis:
    /// `[-10, 1, 1, 1, 11] x 10^6` EUR on the October coupon dates
    /// 2025 through 2030 (skipping 2028).
    pub fn private_credit_default() -> Self {
        let rows = [
            (2025, -10.0),
            (2026, 1.0),
            (2027, 1.0),
            (2029, 1.0),
            (2030, 11.0),
        ]
        .iter()
        .map(|&(year, millions)| {
            // Fixed calendar, known-valid dates.
            let date = Date::from_ymd(year, 10, 1).expect("valid coupon date");
            (date, millions * 1e6)
        })
        .collect();
        Self::new(rows).expect("default schedule is valid")
    }

    /// Attaches an upfront USD premium row.
    ///
    /// Mirrors the option-hedge convention: the premium is paid (as a
    /// negative USD flow) at the analysis date. Passing `None` for the
    /// premium leaves the schedule unchanged.
    ///
    /// # Errors
    ///
    /// `ScheduleError::MissingAnalysisDate` if a premium is supplied
    /// without an analysis date.
    pub fn with_premium(
        mut self,
        premium_usd: Option<f64>,
        analysis_date: Option<Date>,
    ) -> Result<Self, ScheduleError> {
        match (premium_usd, analysis_date) {
            (Some(premium), Some(date)) => {
                self.premium = Some((date, premium));
                Ok(self)
            }
            (Some(_), None) => Err(ScheduleError::MissingAnalysisDate),
            (None, _) => Ok(self),
        }
    }

    /// Number of EUR cashflow rows (the premium row is not counted).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether the EUR column is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// EUR cashflow dates, ascending.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// EUR cashflow amounts, aligned to [`dates`](Self::dates).
    pub fn amounts_eur(&self) -> &[f64] {
        &self.amounts_eur
    }

    /// The upfront USD premium row, if attached: (date, positive amount).
    pub fn premium(&self) -> Option<(Date, f64)> {
        self.premium
    }

    /// First EUR cashflow date.
    pub fn start_date(&self) -> Date {
        self.dates[0]
    }

    /// Last EUR cashflow date.
    pub fn end_date(&self) -> Date {
        *self.dates.last().expect("schedule is non-empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_rows() {
        let d1 = Date::from_ymd(2026, 10, 1).unwrap();
        let d0 = Date::from_ymd(2025, 10, 1).unwrap();
        let schedule = CashflowSchedule::new(vec![(d1, 1.0e6), (d0, -10.0e6)]).unwrap();
        assert_eq!(schedule.dates(), &[d0, d1]);
        assert_eq!(schedule.amounts_eur(), &[-10.0e6, 1.0e6]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            CashflowSchedule::new(vec![]).unwrap_err(),
            ScheduleError::Empty
        );
    }

    #[test]
    fn test_new_rejects_duplicate_dates() {
        let d = Date::from_ymd(2025, 10, 1).unwrap();
        let result = CashflowSchedule::new(vec![(d, 1.0), (d, 2.0)]);
        assert!(matches!(result, Err(ScheduleError::DuplicateDate { .. })));
    }

    #[test]
    fn test_private_credit_default() {
        let schedule = CashflowSchedule::private_credit_default();
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.start_date(), Date::from_ymd(2025, 10, 1).unwrap());
        assert_eq!(schedule.end_date(), Date::from_ymd(2030, 10, 1).unwrap());
        let total: f64 = schedule.amounts_eur().iter().sum();
        assert!((total - 4.0e6).abs() < 1e-6);
    }

    #[test]
    fn test_with_premium_requires_analysis_date() {
        let schedule = CashflowSchedule::private_credit_default();
        let result = schedule.with_premium(Some(1.0e5), None);
        assert_eq!(result.unwrap_err(), ScheduleError::MissingAnalysisDate);
    }

    #[test]
    fn test_with_premium_none_is_identity() {
        let schedule = CashflowSchedule::private_credit_default();
        let same = schedule.clone().with_premium(None, None).unwrap();
        assert_eq!(same, schedule);
    }

    #[test]
    fn test_with_premium_attaches_row() {
        let analysis = Date::from_ymd(2025, 8, 1).unwrap();
        let schedule = CashflowSchedule::private_credit_default()
            .with_premium(Some(2.5e5), Some(analysis))
            .unwrap();
        assert_eq!(schedule.premium(), Some((analysis, 2.5e5)));
        // EUR column is untouched.
        assert_eq!(schedule.len(), 5);
    }
}
