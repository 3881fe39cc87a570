//! Hedge pricing against a simulated path ensemble.
//!
//! This module provides:
//! - [`forward`]: covered-interest-parity forward hedge
//! - [`option`]: ATMF Garman-Kohlhagen put hedge
//! - [`HedgeResult`]: per-cashflow rates/vols plus the payoff matrix
//! - [`HedgeError`]: alignment and parameter validation errors
//!
//! Both hedges follow the same convention: only strictly positive EUR
//! cashflows (inflows) are hedged. Outflow rows carry a NaN rate and an
//! all-zero payoff row so the result matrix stays aligned to the full
//! schedule.

use fxhedge_models::analytical::AnalyticalError;
use thiserror::Error;

pub mod forward;
pub mod option;

/// Hedge pricing failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HedgeError {
    /// A hedged cashflow date precedes the simulated grid, so no spot
    /// level exists to settle against.
    #[error("Cashflow date {date} precedes the simulated path grid")]
    CashflowBeforeGrid {
        /// The offending cashflow date (ISO 8601)
        date: String,
    },

    /// Option parameter validation failed.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}

/// Result of pricing one hedge against a path ensemble.
///
/// The payoff matrix is row-major `n_paths x n_cashflows`, in USD.
/// `rates` holds the contracted forward rate (forward hedge) or the ATMF
/// strike (option hedge) per cashflow, NaN for unhedged rows. `vols` and
/// `premium` are populated by the option hedge only.
#[derive(Debug, Clone, PartialEq)]
pub struct HedgeResult {
    rates: Vec<f64>,
    vols: Option<Vec<f64>>,
    premium: Option<f64>,
    payoffs: Vec<f64>,
    n_paths: usize,
}

impl HedgeResult {
    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of cashflow columns.
    #[inline]
    pub fn n_cashflows(&self) -> usize {
        self.rates.len()
    }

    /// Contracted rate per cashflow (NaN for unhedged rows).
    #[inline]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Interpolated volatility per cashflow, option hedge only.
    #[inline]
    pub fn vols(&self) -> Option<&[f64]> {
        self.vols.as_deref()
    }

    /// Total upfront premium in USD, option hedge only.
    #[inline]
    pub fn premium(&self) -> Option<f64> {
        self.premium
    }

    /// Payoff row for one path, aligned to the cashflow schedule.
    #[inline]
    pub fn path_payoffs(&self, path_idx: usize) -> &[f64] {
        let n = self.n_cashflows();
        &self.payoffs[path_idx * n..(path_idx + 1) * n]
    }

    /// Payoff for one path and one cashflow.
    #[inline]
    pub fn payoff(&self, path_idx: usize, cashflow_idx: usize) -> f64 {
        self.payoffs[path_idx * self.n_cashflows() + cashflow_idx]
    }

    /// The raw row-major payoff matrix.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }
}
