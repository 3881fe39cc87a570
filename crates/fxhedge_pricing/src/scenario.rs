//! Scenario cashflow aggregation.
//!
//! Merges the contractual EUR schedule, the realised path spots, and an
//! optional hedge payoff matrix into one USD cashflow vector per
//! simulated path, all aligned to a common ordered date axis:
//!
//! - unhedged leg: each EUR cashflow converts at the backward-aligned
//!   realised spot of its path
//! - hedged leg: the hedge payoff for that cashflow is added on top
//! - premium: if the schedule carries an upfront premium row, a negative
//!   USD flow identical across paths is inserted at its own date and the
//!   axis re-sorted
//!
//! The premium date may coincide with a cashflow date; the two rows are
//! kept separate on the axis.

use fxhedge_core::types::{CashflowSchedule, Date};
use thiserror::Error;
use tracing::debug;

use crate::hedges::HedgeResult;
use crate::mc::PathEnsemble;

/// Scenario aggregation failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScenarioError {
    /// A cashflow date precedes the simulated grid, so no realised spot
    /// exists to convert at.
    #[error("Cashflow date {date} precedes the simulated path grid")]
    CashflowBeforeGrid {
        /// The offending cashflow date (ISO 8601)
        date: String,
    },

    /// Hedge payoff matrix was priced for a different path count.
    #[error("Hedge priced for {hedge} paths, ensemble has {ensemble}")]
    PathCountMismatch {
        /// Paths in the hedge result
        hedge: usize,
        /// Paths in the ensemble
        ensemble: usize,
    },

    /// Hedge payoff matrix was priced against a different schedule.
    #[error("Hedge priced for {hedge} cashflows, schedule has {schedule}")]
    CashflowCountMismatch {
        /// Cashflow columns in the hedge result
        hedge: usize,
        /// Rows in the schedule
        schedule: usize,
    },
}

/// Per-path USD cashflow vectors on a shared ordered date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioCashflows {
    dates: Vec<Date>,
    n_paths: usize,
    values: Vec<f64>,
}

impl ScenarioCashflows {
    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// The shared date axis, ascending (duplicates possible when the
    /// premium date coincides with a cashflow date).
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// USD cashflow vector for one path, aligned to [`dates`](Self::dates).
    #[inline]
    pub fn path_cashflows(&self, path_idx: usize) -> &[f64] {
        let n = self.dates.len();
        &self.values[path_idx * n..(path_idx + 1) * n]
    }

    /// The raw row-major `n_paths x n_dates` matrix.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Builds per-path USD cashflow scenarios.
///
/// With `hedge = None` only the spot-converted leg is produced. The
/// premium row, if any, comes from the schedule (see
/// [`CashflowSchedule::with_premium`]).
///
/// # Errors
///
/// - `ScenarioError::CashflowBeforeGrid` if any cashflow date precedes
///   the first simulated date
/// - `ScenarioError::PathCountMismatch` / `CashflowCountMismatch` if
///   the hedge result does not match the ensemble and schedule shapes
pub fn build_scenarios(
    paths: &PathEnsemble,
    schedule: &CashflowSchedule,
    hedge: Option<&HedgeResult>,
) -> Result<ScenarioCashflows, ScenarioError> {
    let n_paths = paths.n_paths();
    let n_cashflows = schedule.len();

    if let Some(h) = hedge {
        if h.n_paths() != n_paths {
            return Err(ScenarioError::PathCountMismatch {
                hedge: h.n_paths(),
                ensemble: n_paths,
            });
        }
        if h.n_cashflows() != n_cashflows {
            return Err(ScenarioError::CashflowCountMismatch {
                hedge: h.n_cashflows(),
                schedule: n_cashflows,
            });
        }
    }

    let mut aligned = Vec::with_capacity(n_cashflows);
    for &date in schedule.dates() {
        let idx = paths
            .index_at_or_before(date)
            .ok_or_else(|| ScenarioError::CashflowBeforeGrid {
                date: date.to_string(),
            })?;
        aligned.push(idx);
    }

    // Axis entries: each EUR cashflow column, plus the premium row.
    // Stable sort keeps the premium first among equal dates.
    enum Row {
        Premium(f64),
        Cashflow(usize),
    }
    let mut rows: Vec<(Date, Row)> = Vec::with_capacity(n_cashflows + 1);
    if let Some((date, amount)) = schedule.premium() {
        rows.push((date, Row::Premium(-amount)));
    }
    for (i, &date) in schedule.dates().iter().enumerate() {
        rows.push((date, Row::Cashflow(i)));
    }
    rows.sort_by_key(|(date, _)| *date);

    let dates: Vec<Date> = rows.iter().map(|(date, _)| *date).collect();
    let n_dates = dates.len();

    debug!(n_paths, n_dates, "aggregating scenario cashflows");

    let mut values = vec![0.0; n_paths * n_dates];
    for path_idx in 0..n_paths {
        let out = &mut values[path_idx * n_dates..(path_idx + 1) * n_dates];
        for (slot, (_, row)) in out.iter_mut().zip(&rows) {
            *slot = match *row {
                Row::Premium(amount) => amount,
                Row::Cashflow(i) => {
                    let spot = paths.spot(path_idx, aligned[i]);
                    let mut usd = schedule.amounts_eur()[i] * spot;
                    if let Some(h) = hedge {
                        usd += h.payoff(path_idx, i);
                    }
                    usd
                }
            };
        }
    }

    Ok(ScenarioCashflows {
        dates,
        n_paths,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hedges::forward::forward_hedge;
    use crate::mc::{simulate_gbm_paths, Scheme};
    use approx::assert_relative_eq;
    use fxhedge_models::models::GbmParams;

    const S0: f64 = 1.1422;
    const RD: f64 = 0.0439;
    const RF: f64 = 0.01827;

    fn ensemble(n_paths: usize) -> PathEnsemble {
        simulate_gbm_paths(
            S0,
            GbmParams { mu: 0.0, sigma: 0.08 },
            Date::from_ymd(2025, 8, 1).unwrap(),
            Date::from_ymd(2030, 10, 1).unwrap(),
            n_paths,
            252,
            Some(42),
            Scheme::Exact,
        )
        .unwrap()
    }

    fn analysis_date() -> Date {
        Date::from_ymd(2025, 8, 1).unwrap()
    }

    #[test]
    fn test_unhedged_converts_at_realised_spot() {
        let paths = ensemble(6);
        let schedule = CashflowSchedule::private_credit_default();
        let scenarios = build_scenarios(&paths, &schedule, None).unwrap();

        assert_eq!(scenarios.dates(), schedule.dates());
        for path_idx in 0..6 {
            let cfs = scenarios.path_cashflows(path_idx);
            for (i, &date) in schedule.dates().iter().enumerate() {
                let step = paths.index_at_or_before(date).unwrap();
                let expected = schedule.amounts_eur()[i] * paths.spot(path_idx, step);
                assert_relative_eq!(cfs[i], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_hedged_adds_payoff_on_top() {
        let paths = ensemble(4);
        let schedule = CashflowSchedule::private_credit_default();
        let hedge = forward_hedge(&paths, &schedule, S0, RD, RF, 1.0, analysis_date()).unwrap();

        let plain = build_scenarios(&paths, &schedule, None).unwrap();
        let hedged = build_scenarios(&paths, &schedule, Some(&hedge)).unwrap();

        for path_idx in 0..4 {
            let plain_cfs = plain.path_cashflows(path_idx);
            let hedged_cfs = hedged.path_cashflows(path_idx);
            for i in 0..schedule.len() {
                let expected = plain_cfs[i] + hedge.payoff(path_idx, i);
                assert_relative_eq!(hedged_cfs[i], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_premium_row_inserted_first() {
        let paths = ensemble(3);
        let schedule = CashflowSchedule::private_credit_default()
            .with_premium(Some(2.5e5), Some(analysis_date()))
            .unwrap();
        let scenarios = build_scenarios(&paths, &schedule, None).unwrap();

        // Analysis date precedes the first cashflow: premium row leads.
        assert_eq!(scenarios.dates().len(), 6);
        assert_eq!(scenarios.dates()[0], analysis_date());
        for path_idx in 0..3 {
            assert_eq!(scenarios.path_cashflows(path_idx)[0], -2.5e5);
        }
        assert!(scenarios.dates().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_premium_on_cashflow_date_kept_separate() {
        let paths = ensemble(2);
        let first_cf = Date::from_ymd(2025, 10, 1).unwrap();
        let schedule = CashflowSchedule::private_credit_default()
            .with_premium(Some(1.0e5), Some(first_cf))
            .unwrap();
        let scenarios = build_scenarios(&paths, &schedule, None).unwrap();

        assert_eq!(scenarios.dates().len(), 6);
        assert_eq!(scenarios.dates()[0], first_cf);
        assert_eq!(scenarios.dates()[1], first_cf);
        assert_eq!(scenarios.path_cashflows(0)[0], -1.0e5);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let paths = ensemble(4);
        let other_paths = ensemble(5);
        let schedule = CashflowSchedule::private_credit_default();
        let hedge =
            forward_hedge(&other_paths, &schedule, S0, RD, RF, 1.0, analysis_date()).unwrap();
        let result = build_scenarios(&paths, &schedule, Some(&hedge));
        assert!(matches!(
            result,
            Err(ScenarioError::PathCountMismatch { .. })
        ));

        let short = CashflowSchedule::new(vec![(Date::from_ymd(2026, 10, 1).unwrap(), 1.0e6)])
            .unwrap();
        let hedge = forward_hedge(&paths, &schedule, S0, RD, RF, 1.0, analysis_date()).unwrap();
        let result = build_scenarios(&paths, &short, Some(&hedge));
        assert!(matches!(
            result,
            Err(ScenarioError::CashflowCountMismatch { .. })
        ));
    }

    #[test]
    fn test_cashflow_before_grid_rejected() {
        let paths = ensemble(2);
        let early = Date::from_ymd(2025, 1, 1).unwrap();
        let schedule = CashflowSchedule::new(vec![(early, 1.0e6)]).unwrap();
        let result = build_scenarios(&paths, &schedule, None);
        assert!(matches!(
            result,
            Err(ScenarioError::CashflowBeforeGrid { .. })
        ));
    }
}
