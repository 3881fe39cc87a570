//! Historical GBM parameter estimation.
//!
//! Calibrates annualised drift and volatility from a historical spot
//! series sampled at `steps_per_year` observations per year.

use fxhedge_core::types::market::{QuoteSide, SpotSeries};

use crate::models::GbmParams;

/// Estimates GBM parameters from consecutive spot observations.
///
/// Let `dt = 1 / steps_per_year` and `x_i = ln(s_{i+1} / s_i)` be the log
/// returns of the (already sorted, finite) spot samples. Then
/// `sigma = stdev(x, sample-corrected) / sqrt(dt)` and, unless
/// `use_zero_mu` is set, `mu = mean(x) / dt + 0.5 * sigma^2` (the Itô
/// correction recovers the price drift from the log drift).
///
/// # Preconditions
///
/// `spots` must contain at least two observations and be sorted in date
/// order with non-finite values already removed (see
/// [`SpotSeries::clean_quotes`]). Shorter inputs yield NaN statistics;
/// callers are expected to reject them beforehand.
///
/// # Examples
///
/// ```
/// use fxhedge_models::calibration::estimate_gbm_params;
///
/// // Constant-ratio series: zero vol, drift fully determined.
/// let spots: Vec<f64> = (0..10).map(|i| 1.10 * 1.001_f64.powi(i)).collect();
/// let params = estimate_gbm_params(&spots, 252, false);
/// assert!(params.sigma.abs() < 1e-12);
/// assert!((params.mu - 252.0 * 1.001_f64.ln()).abs() < 1e-9);
/// ```
pub fn estimate_gbm_params(spots: &[f64], steps_per_year: u32, use_zero_mu: bool) -> GbmParams {
    let dt = 1.0 / f64::from(steps_per_year);

    let log_returns: Vec<f64> = spots.windows(2).map(|w| (w[1] / w[0]).ln()).collect();

    let n = log_returns.len() as f64;
    let mean = log_returns.iter().sum::<f64>() / n;
    let variance = log_returns
        .iter()
        .map(|x| (x - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    let sigma = variance.sqrt() / dt.sqrt();
    let mu = if use_zero_mu {
        0.0
    } else {
        mean / dt + 0.5 * sigma * sigma
    };

    GbmParams { mu, sigma }
}

/// Estimates GBM parameters straight from a [`SpotSeries`].
///
/// Filters non-finite quotes from the requested side and delegates to
/// [`estimate_gbm_params`]. Same preconditions apply to the cleaned
/// series.
pub fn estimate_from_series(
    series: &SpotSeries,
    side: QuoteSide,
    steps_per_year: u32,
    use_zero_mu: bool,
) -> GbmParams {
    let spots = series.clean_quotes(side);
    estimate_gbm_params(&spots, steps_per_year, use_zero_mu)
}
