//! ATM volatility curve with two tenor anchors.
//!
//! The market supplies ATM implied volatilities at the 1-year and 5-year
//! tenors only. The curve is flat outside the anchors and linear between
//! them; no smile dimension is modelled (hedge strikes are always ATMF).

use serde::{Deserialize, Serialize};

/// Tenor of the short volatility anchor, in years.
const TENOR_1Y: f64 = 1.0;

/// Tenor of the long volatility anchor, in years.
const TENOR_5Y: f64 = 5.0;

/// Two-anchor ATM volatility curve.
///
/// # Examples
///
/// ```
/// use fxhedge_models::vol::AtmVolCurve;
///
/// let curve = AtmVolCurve::new(0.08, 0.10);
/// assert_eq!(curve.vol(0.5), 0.08);   // flat below 1y
/// assert_eq!(curve.vol(3.0), 0.09);   // midpoint
/// assert_eq!(curve.vol(7.0), 0.10);   // flat above 5y
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmVolCurve {
    /// ATM volatility at the 1-year tenor.
    pub vol_1y: f64,
    /// ATM volatility at the 5-year tenor.
    pub vol_5y: f64,
}

impl AtmVolCurve {
    /// Creates a curve from the two anchors.
    pub fn new(vol_1y: f64, vol_5y: f64) -> Self {
        Self { vol_1y, vol_5y }
    }

    /// Interpolated ATM volatility at tenor `tau` (years).
    ///
    /// Flat at `vol_1y` for `tau <= 1`, flat at `vol_5y` for `tau >= 5`,
    /// linear in between.
    pub fn vol(&self, tau: f64) -> f64 {
        if tau <= TENOR_1Y {
            return self.vol_1y;
        }
        if tau >= TENOR_5Y {
            return self.vol_5y;
        }
        let w = (tau - TENOR_1Y) / (TENOR_5Y - TENOR_1Y);
        (1.0 - w) * self.vol_1y + w * self.vol_5y
    }
}
