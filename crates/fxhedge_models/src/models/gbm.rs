//! Geometric Brownian Motion (GBM) parameters.
//!
//! GBM describes the spot dynamics used throughout the engine:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//! with the exact log-space solution
//! ```text
//! S(t + dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*dW)
//! ```
//! Parameter estimation from historical spots lives in
//! [`crate::calibration`].

use serde::{Deserialize, Serialize};

/// Annualised GBM drift and volatility.
///
/// [`new`](Self::new) rejects negative or non-finite values. The fields
/// stay public so calibrated or literal parameters can be assembled
/// directly; the path simulator re-validates `sigma` before drawing.
///
/// # Examples
///
/// ```
/// use fxhedge_models::models::GbmParams;
///
/// let params = GbmParams::new(0.0, 0.08).unwrap();
/// assert_eq!(params.mu, 0.0);
///
/// assert!(GbmParams::new(0.0, -0.1).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GbmParams {
    /// Annualised drift.
    pub mu: f64,
    /// Annualised volatility (non-negative).
    pub sigma: f64,
}

impl GbmParams {
    /// Creates GBM parameters, rejecting negative volatility.
    ///
    /// Returns `None` if `sigma < 0` or either value is non-finite.
    pub fn new(mu: f64, sigma: f64) -> Option<Self> {
        if sigma < 0.0 || !sigma.is_finite() || !mu.is_finite() {
            return None;
        }
        Some(Self { mu, sigma })
    }

    /// Drift of the log-price process: `mu - 0.5 * sigma^2`.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        self.mu - 0.5 * self.sigma * self.sigma
    }

    /// Replaces the drift with zero, keeping the volatility.
    ///
    /// The simulator defaults to zero drift while hedge valuation derives
    /// forwards from the rate differential; the two measures are not
    /// reconciled, matching the underlying analysis.
    #[inline]
    pub fn with_zero_mu(self) -> Self {
        Self { mu: 0.0, ..self }
    }
}
