//! Distribution summaries over metric vectors.
//!
//! Non-finite entries (the NaN sentinels of the metric layer) are
//! filtered before any statistic is computed, so a handful of degenerate
//! paths never poisons the summary of an otherwise healthy ensemble.

use serde::{Deserialize, Serialize};

/// Summary statistics of one metric across the ensemble.
///
/// `n` counts the finite observations that survived filtering; the
/// statistics are NaN when `n == 0`, and `std` is 0 when `n <= 1`
/// (sample standard deviation of a singleton).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Finite observation count.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// 5th percentile.
    pub p05: f64,
    /// Median.
    pub p50: f64,
    /// 95th percentile.
    pub p95: f64,
}

impl DistributionSummary {
    fn empty() -> Self {
        Self {
            n: 0,
            mean: f64::NAN,
            std: f64::NAN,
            p05: f64::NAN,
            p50: f64::NAN,
            p95: f64::NAN,
        }
    }
}

/// Quantile of a sorted sample with linear interpolation between
/// adjacent order statistics. `q` is clamped to `[0, 1]`.
///
/// NaN for an empty sample.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 1.0);
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Summarizes a metric vector after filtering out non-finite entries.
///
/// # Examples
///
/// ```
/// use fxhedge_risk::distribution::summarize;
///
/// let summary = summarize(&[1.0, 2.0, f64::NAN, 3.0]);
/// assert_eq!(summary.n, 3);
/// assert_eq!(summary.mean, 2.0);
/// ```
pub fn summarize(values: &[f64]) -> DistributionSummary {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return DistributionSummary::empty();
    }
    finite.sort_by(f64::total_cmp);

    let n = finite.len();
    let mean = finite.iter().sum::<f64>() / n as f64;
    let std = if n <= 1 {
        0.0
    } else {
        let ss: f64 = finite.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };

    DistributionSummary {
        n,
        mean,
        std,
        p05: quantile(&finite, 0.05),
        p50: quantile(&finite, 0.50),
        p95: quantile(&finite, 0.95),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_input_all_nan() {
        let summary = summarize(&[]);
        assert_eq!(summary.n, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.std.is_nan());
        assert!(summary.p50.is_nan());
    }

    #[test]
    fn test_all_nan_input_treated_as_empty() {
        let summary = summarize(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(summary.n, 0);
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn test_singleton_has_zero_std() {
        let summary = summarize(&[5.0]);
        assert_eq!(summary.n, 1);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.p50, 5.0);
    }

    #[test]
    fn test_nan_entries_filtered() {
        let summary = summarize(&[1.0, f64::NAN, 2.0, 3.0, f64::NAN]);
        assert_eq!(summary.n, 3);
        assert_eq!(summary.mean, 2.0);
        assert_relative_eq!(summary.std, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_percentiles_linear_interpolation() {
        // 1..=100: p95 sits at h = 99 * 0.95 = 94.05.
        let values: Vec<f64> = (1..=100).map(|i| i as f64).collect();
        let summary = summarize(&values);
        assert_relative_eq!(summary.p05, 5.95, epsilon = 1e-12);
        assert_relative_eq!(summary.p50, 50.5, epsilon = 1e-12);
        assert_relative_eq!(summary.p95, 95.05, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_endpoints() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 3.0);
        assert_eq!(quantile(&sorted, 0.5), 2.0);
        // Out-of-range q clamps.
        assert_eq!(quantile(&sorted, 1.5), 3.0);
        assert_eq!(quantile(&sorted, -0.5), 1.0);
    }

    #[test]
    fn test_quantile_empty_is_nan() {
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = summarize(&[1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"mean\":2.0"));
    }
}
