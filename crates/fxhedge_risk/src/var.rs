//! VaR, Expected Shortfall, and threshold probabilities.
//!
//! Losses follow the convention "higher = worse": a loss transform maps
//! a metric vector into non-negative losses before the tail statistics
//! are taken.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::{quantile, summarize, DistributionSummary};
use crate::error::RiskError;

/// Loss transform applied to a metric before VaR/ES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossMode {
    /// `max(0, -metric)`: shortfall below zero NPV.
    #[default]
    NpvShortfall,
    /// `max(0, -metric)`: shortfall below zero IRR.
    IrrShortfall,
    /// `max(0, 1 - metric)`: shortfall below a 1.0x multiple.
    MoicShortfall,
    /// No transform: skip VaR/ES entirely.
    None,
}

impl LossMode {
    /// The configuration name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            LossMode::NpvShortfall => "npv_shortfall",
            LossMode::IrrShortfall => "irr_shortfall",
            LossMode::MoicShortfall => "moic_shortfall",
            LossMode::None => "none",
        }
    }

    /// Applies the transform to one metric value.
    fn loss(self, metric: f64) -> f64 {
        match self {
            LossMode::NpvShortfall | LossMode::IrrShortfall => (-metric).max(0.0),
            LossMode::MoicShortfall => (1.0 - metric).max(0.0),
            LossMode::None => f64::NAN,
        }
    }
}

impl fmt::Display for LossMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LossMode {
    type Err = RiskError;

    /// Parses a loss-mode selector; the error message enumerates the
    /// valid options.
    fn from_str(s: &str) -> Result<Self, RiskError> {
        match s {
            "npv_shortfall" => Ok(LossMode::NpvShortfall),
            "irr_shortfall" => Ok(LossMode::IrrShortfall),
            "moic_shortfall" => Ok(LossMode::MoicShortfall),
            "none" => Ok(LossMode::None),
            _ => Err(RiskError::UnknownLossMode { got: s.to_string() }),
        }
    }
}

/// Value at Risk and Expected Shortfall of a loss vector.
///
/// `VaR` is the `alpha` quantile of the finite losses (linear
/// interpolation between order statistics); `ES` is the mean of the
/// losses at or above the VaR. Both are NaN for an empty input; ES is
/// NaN when the tail set is empty.
pub fn var_es(losses: &[f64], alpha: f64) -> (f64, f64) {
    let mut finite: Vec<f64> = losses.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    finite.sort_by(f64::total_cmp);

    let var = quantile(&finite, alpha);
    let tail: Vec<f64> = finite.iter().copied().filter(|&l| l >= var).collect();
    let es = if tail.is_empty() {
        f64::NAN
    } else {
        tail.iter().sum::<f64>() / tail.len() as f64
    };
    (var, es)
}

/// Fraction of finite values strictly below `threshold`.
///
/// NaN if the input is empty after filtering.
pub fn prob_below(values: &[f64], threshold: f64) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().filter(|&&v| v < threshold).count() as f64 / finite.len() as f64
}

/// Fraction of finite values strictly above `threshold`.
///
/// NaN if the input is empty after filtering.
pub fn prob_above(values: &[f64], threshold: f64) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().filter(|&&v| v > threshold).count() as f64 / finite.len() as f64
}

/// Distribution summary plus tail risk of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Summary statistics of the raw metric.
    pub distribution: DistributionSummary,
    /// Confidence level used for the tail statistics.
    pub alpha: f64,
    /// Loss transform the tail statistics were computed on.
    pub loss_mode: LossMode,
    /// Value at Risk of the transformed losses; absent for
    /// [`LossMode::None`].
    pub var: Option<f64>,
    /// Expected Shortfall of the transformed losses; absent for
    /// [`LossMode::None`].
    pub es: Option<f64>,
}

/// Summarizes a metric vector and computes VaR/ES on its loss
/// transform.
///
/// With [`LossMode::None`] the tail statistics are skipped and the
/// result carries the distribution summary only.
pub fn risk_summary_for_metric(metric: &[f64], alpha: f64, loss_mode: LossMode) -> RiskSummary {
    let distribution = summarize(metric);

    let (var, es) = match loss_mode {
        LossMode::None => (None, None),
        mode => {
            // Drop NaN sentinels (unbracketed IRR paths) before the
            // transform: max() would silently map them to zero losses.
            let losses: Vec<f64> = metric
                .iter()
                .copied()
                .filter(|m| m.is_finite())
                .map(|m| mode.loss(m))
                .collect();
            let (var, es) = var_es(&losses, alpha);
            (Some(var), Some(es))
        }
    };

    debug!(
        n = distribution.n,
        alpha,
        mode = %loss_mode,
        "risk summary computed"
    );

    RiskSummary {
        distribution,
        alpha,
        loss_mode,
        var,
        es,
    }
}
