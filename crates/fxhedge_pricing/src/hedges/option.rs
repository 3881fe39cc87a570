//! ATMF put-option hedge.
//!
//! Each positive EUR cashflow is hedged with a European EUR put struck
//! at the ATMF forward for its maturity, using the two-anchor ATM
//! volatility curve and the Garman-Kohlhagen closed form. The per-unit
//! premiums are scaled by the hedged notional and summed undiscounted
//! into a single upfront USD amount (the aggregate premium is not
//! present-valued back to the payment date, a deliberate simplification).

use fxhedge_core::types::{CashflowSchedule, Date, DayCount};
use fxhedge_models::analytical::fx_put_price;
use fxhedge_models::vol::AtmVolCurve;
use tracing::debug;

use super::{HedgeError, HedgeResult};
use crate::mc::PathEnsemble;

/// Prices an ATMF put hedge of the schedule's positive EUR cashflows
/// against the simulated ensemble.
///
/// Per hedged cashflow: strike = ATMF forward at its maturity, vol from
/// the interpolated curve at its tenor, payoff per path
/// `hedge_ratio * cf_eur * max(strike - spot, 0)` against the
/// backward-aligned spot. The result's `premium` is the total upfront
/// USD premium and `vols` the per-cashflow volatilities (NaN for
/// unhedged rows).
///
/// # Errors
///
/// - `HedgeError::CashflowBeforeGrid` if a hedged cashflow date
///   precedes the first simulated date
/// - `HedgeError::Analytical` if the spot or a derived strike is
///   non-positive
#[allow(clippy::too_many_arguments)]
pub fn put_option_hedge(
    paths: &PathEnsemble,
    schedule: &CashflowSchedule,
    s0: f64,
    rate_domestic: f64,
    rate_foreign: f64,
    hedge_ratio: f64,
    vol_curve: AtmVolCurve,
    start_date: Date,
) -> Result<HedgeResult, HedgeError> {
    let n_paths = paths.n_paths();
    let n_cashflows = schedule.len();

    let mut strikes = vec![f64::NAN; n_cashflows];
    let mut vols = vec![f64::NAN; n_cashflows];
    let mut aligned = vec![None; n_cashflows];
    let mut premium = 0.0;

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

        let tau = DayCount::Act365.year_fraction(start_date, date);
        let strike = s0 * ((rate_domestic - rate_foreign) * tau).exp();
        let vol = vol_curve.vol(tau);
        let unit_premium = fx_put_price(s0, strike, rate_domestic, rate_foreign, vol, tau)?;

        strikes[i] = strike;
        vols[i] = vol;
        aligned[i] = Some(idx);
        premium += hedge_ratio * cf * unit_premium;
    }

    debug!(
        n_paths,
        n_cashflows, hedge_ratio, premium, "put option hedge priced"
    );

    let mut payoffs = vec![0.0; n_paths * n_cashflows];
    for path_idx in 0..n_paths {
        let row = &mut payoffs[path_idx * n_cashflows..(path_idx + 1) * n_cashflows];
        for (i, slot) in row.iter_mut().enumerate() {
            if let Some(step) = aligned[i] {
                let spot = paths.spot(path_idx, step);
                *slot = hedge_ratio
                    * schedule.amounts_eur()[i]
                    * (strikes[i] - spot).max(0.0);
            }
        }
    }

    Ok(HedgeResult {
        rates: strikes,
        vols: Some(vols),
        premium: Some(premium),
        payoffs,
        n_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn curve() -> AtmVolCurve {
        AtmVolCurve::new(0.08, 0.09)
    }

    fn hedge(paths: &PathEnsemble, hr: f64) -> HedgeResult {
        let schedule = CashflowSchedule::private_credit_default();
        put_option_hedge(paths, &schedule, S0, RD, RF, hr, curve(), analysis_date()).unwrap()
    }

    #[test]
    fn test_payoffs_non_negative() {
        let paths = ensemble(200);
        let result = hedge(&paths, 1.0);
        assert!(result.payoffs().iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_premium_positive_with_positive_vol() {
        let paths = ensemble(5);
        let result = hedge(&paths, 1.0);
        assert!(result.premium().unwrap() > 0.0);
    }

    #[test]
    fn test_zero_hedge_ratio_zero_payoffs_and_premium() {
        let paths = ensemble(50);
        let result = hedge(&paths, 0.0);
        assert!(result.payoffs().iter().all(|&p| p == 0.0));
        assert_eq!(result.premium(), Some(0.0));
    }

    #[test]
    fn test_strikes_are_atmf_forwards() {
        let paths = ensemble(3);
        let schedule = CashflowSchedule::private_credit_default();
        let result = hedge(&paths, 1.0);
        for (i, &date) in schedule.dates().iter().enumerate() {
            if schedule.amounts_eur()[i] <= 0.0 {
                assert!(result.rates()[i].is_nan());
                continue;
            }
            let tau = ((date - analysis_date()) as f64) / 365.0;
            let expected = S0 * ((RD - RF) * tau).exp();
            assert_relative_eq!(result.rates()[i], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_vols_follow_curve_anchors() {
        let paths = ensemble(3);
        let result = hedge(&paths, 1.0);
        let vols = result.vols().unwrap();
        // 2026-10-01 tenor ~1.17y: between the anchors.
        assert!(vols[1] > 0.08 && vols[1] < 0.09);
        // 2030-10-01 tenor > 5y: flat at the long anchor.
        assert_relative_eq!(vols[4], 0.09, epsilon = 1e-12);
        // Outflow row carries no vol.
        assert!(vols[0].is_nan());
    }

    #[test]
    fn test_payoff_formula_matches_aligned_spot() {
        let paths = ensemble(8);
        let schedule = CashflowSchedule::private_credit_default();
        let hr = 0.5;
        let result = hedge(&paths, hr);

        let cf_date = schedule.dates()[4];
        let step = paths.index_at_or_before(cf_date).unwrap();
        for path_idx in 0..8 {
            let spot = paths.spot(path_idx, step);
            let expected = hr * 11.0e6 * (result.rates()[4] - spot).max(0.0);
            assert_relative_eq!(result.payoff(path_idx, 4), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_premium_scales_with_notional() {
        let paths = ensemble(2);
        let schedule = CashflowSchedule::private_credit_default();
        let doubled: Vec<(Date, f64)> = schedule
            .dates()
            .iter()
            .zip(schedule.amounts_eur())
            .map(|(&d, &cf)| (d, 2.0 * cf))
            .collect();
        let doubled = CashflowSchedule::new(doubled).unwrap();

        let base = hedge(&paths, 1.0).premium().unwrap();
        let scaled =
            put_option_hedge(&paths, &doubled, S0, RD, RF, 1.0, curve(), analysis_date())
                .unwrap()
                .premium()
                .unwrap();
        assert_relative_eq!(scaled, 2.0 * base, epsilon = 1e-6);
    }

    #[test]
    fn test_cashflow_before_grid_rejected() {
        let paths = ensemble(2);
        let early = Date::from_ymd(2024, 1, 1).unwrap();
        let schedule = CashflowSchedule::new(vec![(early, 1.0e6)]).unwrap();
        let result =
            put_option_hedge(&paths, &schedule, S0, RD, RF, 1.0, curve(), analysis_date());
        assert!(matches!(
            result,
            Err(HedgeError::CashflowBeforeGrid { .. })
        ));
    }
}
