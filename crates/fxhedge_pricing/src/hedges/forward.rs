//! Covered-interest-parity forward hedge.
//!
//! The forward rate for every maturity uses a single flat domestic and
//! foreign rate pair (no term structure):
//!
//! ```text
//! F(0,T) = s0 * exp((rd - rf) * yearfrac(start, T))
//! ```
//!
//! Selling the EUR inflow forward locks the rate `F`; at settlement the
//! hedge pays the difference between the contracted forward and the
//! realised spot, scaled by the hedge ratio.

use fxhedge_core::types::{CashflowSchedule, Date, DayCount};
use tracing::debug;

use super::{HedgeError, HedgeResult};
use crate::mc::PathEnsemble;

/// Forward rate at maturity `date` under covered interest parity.
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::Date;
/// use fxhedge_pricing::hedges::forward::forward_rate;
///
/// let start = Date::from_ymd(2025, 10, 1).unwrap();
/// let end = Date::from_ymd(2026, 10, 1).unwrap();
/// let f = forward_rate(1.1422, 0.0439, 0.01827, start, end);
/// assert!(f > 1.1422); // rd > rf: forward above spot
/// ```
pub fn forward_rate(
    s0: f64,
    rate_domestic: f64,
    rate_foreign: f64,
    start: Date,
    date: Date,
) -> f64 {
    let yf = DayCount::Act365.year_fraction(start, date);
    s0 * ((rate_domestic - rate_foreign) * yf).exp()
}

/// Prices a forward hedge of the schedule's positive EUR cashflows
/// against the simulated ensemble.
///
/// Each hedged cashflow settles against the spot at the latest grid date
/// at or before the cashflow date (backward alignment). Payoff per path
/// is `hedge_ratio * cf_eur * (forward - spot)`; outflow rows carry a
/// NaN rate and a zero payoff.
///
/// # Errors
///
/// `HedgeError::CashflowBeforeGrid` if a hedged cashflow date precedes
/// the first simulated date.
pub fn forward_hedge(
    paths: &PathEnsemble,
    schedule: &CashflowSchedule,
    s0: f64,
    rate_domestic: f64,
    rate_foreign: f64,
    hedge_ratio: f64,
    start_date: Date,
) -> Result<HedgeResult, HedgeError> {
    let n_paths = paths.n_paths();
    let n_cashflows = schedule.len();

    let mut rates = vec![f64::NAN; n_cashflows];
    let mut aligned = vec![None; n_cashflows];
    for (i, (&date, &cf)) in schedule
        .dates()
        .iter()
        .zip(schedule.amounts_eur())
        .enumerate()
    {
        if cf <= 0.0 {
            continue;
        }
        let idx = paths
            .index_at_or_before(date)
            .ok_or_else(|| HedgeError::CashflowBeforeGrid {
                date: date.to_string(),
            })?;
        rates[i] = forward_rate(s0, rate_domestic, rate_foreign, start_date, date);
        aligned[i] = Some(idx);
    }

    debug!(n_paths, n_cashflows, hedge_ratio, "forward hedge priced");

    let mut payoffs = vec![0.0; n_paths * n_cashflows];
    for path_idx in 0..n_paths {
        let row = &mut payoffs[path_idx * n_cashflows..(path_idx + 1) * n_cashflows];
        for (i, slot) in row.iter_mut().enumerate() {
            if let Some(step) = aligned[i] {
                let spot = paths.spot(path_idx, step);
                *slot = hedge_ratio * schedule.amounts_eur()[i] * (rates[i] - spot);
            }
        }
    }

    Ok(HedgeResult {
        rates,
        vols: None,
        premium: None,
        payoffs,
        n_paths,
    })
}
