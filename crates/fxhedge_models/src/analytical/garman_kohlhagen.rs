//! Garman-Kohlhagen model for FX option pricing.
//!
//! The Garman-Kohlhagen formula extends Black-Scholes to currency
//! options by discounting with two rates: the domestic rate `rd` on the
//! strike leg and the foreign rate `rf` on the spot leg. Written in
//! forward terms with `F = S * exp((rd - rf) * tau)`:
//!
//! ```text
//! d1 = (ln(F/K) + 0.5 * sigma^2 * tau) / (sigma * sqrt(tau))
//! d2 = d1 - sigma * sqrt(tau)
//! Put  = exp(-rd*tau) * (K * N(-d2) - F * N(-d1))
//! Call = exp(-rd*tau) * (F * N(d1)  - K * N(d2))
//! ```
//!
//! Two degenerate regimes are priced exactly rather than rejected:
//! - `tau <= 0`: immediate exercise, intrinsic value against spot
//! - `sigma <= 0`: deterministic terminal spot at the forward, so the
//!   price is the discounted forward intrinsic
//!
//! # Examples
//!
//! ```
//! use fxhedge_models::analytical::{
//!     FxOptionType, GarmanKohlhagen, GarmanKohlhagenParams,
//! };
//!
//! let params = GarmanKohlhagenParams::new(
//!     1.10,   // spot
//!     1.12,   // strike
//!     0.03,   // domestic rate
//!     0.01,   // foreign rate
//!     0.15,   // volatility
//!     1.0,    // tenor (years)
//! ).unwrap();
//!
//! let model = GarmanKohlhagen::new(params);
//! let call = model.price(FxOptionType::Call);
//! let put = model.price(FxOptionType::Put);
//!
//! // Put-call parity: C - P = df_d * (F - K)
//! let df_d = (-0.03_f64).exp();
//! let parity = call - put - df_d * (params.forward() - 1.12);
//! assert!(parity.abs() < 1e-10);
//! ```

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// FX option exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FxOptionType {
    /// Right to buy the foreign currency.
    Call,
    /// Right to sell the foreign currency.
    Put,
}

/// Parameters for the Garman-Kohlhagen model.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g. `f64`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmanKohlhagenParams<T: Float> {
    /// Spot exchange rate (domestic per foreign unit).
    pub spot: T,
    /// Strike.
    pub strike: T,
    /// Domestic risk-free rate, continuous compounding.
    pub rate_domestic: T,
    /// Foreign risk-free rate, continuous compounding.
    pub rate_foreign: T,
    /// Volatility of the exchange rate (zero allowed).
    pub volatility: T,
    /// Time to expiry in years (non-positive allowed: intrinsic).
    pub tenor: T,
}

impl<T: Float> GarmanKohlhagenParams<T> {
    /// Creates new Garman-Kohlhagen parameters.
    ///
    /// # Errors
    ///
    /// - `AnalyticalError::InvalidSpot` for non-positive spot
    /// - `AnalyticalError::InvalidStrike` for non-positive strike
    /// - `AnalyticalError::InvalidVolatility` for negative volatility
    pub fn new(
        spot: T,
        strike: T,
        rate_domestic: T,
        rate_foreign: T,
        volatility: T,
        tenor: T,
    ) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if strike <= T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility < T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            spot,
            strike,
            rate_domestic,
            rate_foreign,
            volatility,
            tenor,
        })
    }

    /// Covered-interest-parity forward: `F = S * exp((rd - rf) * tau)`.
    #[inline]
    pub fn forward(&self) -> T {
        let drift = (self.rate_domestic - self.rate_foreign) * self.tenor;
        self.spot * drift.exp()
    }
}

/// Garman-Kohlhagen FX option model.
///
/// Wraps a parameter set and prices European calls and puts, including
/// the zero-tenor and zero-volatility degenerate regimes.
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen<T: Float> {
    params: GarmanKohlhagenParams<T>,
}

impl<T: Float> GarmanKohlhagen<T> {
    /// Creates a model instance from validated parameters.
    pub fn new(params: GarmanKohlhagenParams<T>) -> Self {
        Self { params }
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &GarmanKohlhagenParams<T> {
        &self.params
    }

    /// Computes the option price in domestic currency per foreign unit.
    pub fn price(&self, option_type: FxOptionType) -> T {
        let p = &self.params;
        let zero = T::zero();

        // Expired or same-day exercise: intrinsic against spot.
        if p.tenor <= zero {
            return match option_type {
                FxOptionType::Call => (p.spot - p.strike).max(zero),
                FxOptionType::Put => (p.strike - p.spot).max(zero),
            };
        }

        let forward = p.forward();
        let df_domestic = (-p.rate_domestic * p.tenor).exp();

        // Deterministic terminal spot: discounted forward intrinsic.
        if p.volatility <= zero {
            return match option_type {
                FxOptionType::Call => df_domestic * (forward - p.strike).max(zero),
                FxOptionType::Put => df_domestic * (p.strike - forward).max(zero),
            };
        }

        let half = T::from(0.5).unwrap();
        let sqrt_t = p.tenor.sqrt();
        let vol_sqrt_t = p.volatility * sqrt_t;
        let d1 = ((forward / p.strike).ln() + half * p.volatility * p.volatility * p.tenor)
            / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        match option_type {
            FxOptionType::Call => {
                df_domestic * (forward * norm_cdf(d1) - p.strike * norm_cdf(d2))
            }
            FxOptionType::Put => {
                df_domestic * (p.strike * norm_cdf(-d2) - forward * norm_cdf(-d1))
            }
        }
    }
}

/// Prices an FX put in one call.
///
/// # Errors
///
/// Propagates parameter validation errors from
/// [`GarmanKohlhagenParams::new`].
pub fn fx_put_price<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    tenor: T,
) -> Result<T, AnalyticalError> {
    let params =
        GarmanKohlhagenParams::new(spot, strike, rate_domestic, rate_foreign, volatility, tenor)?;
    Ok(GarmanKohlhagen::new(params).price(FxOptionType::Put))
}

/// Prices an FX call in one call.
///
/// # Errors
///
/// Propagates parameter validation errors from
/// [`GarmanKohlhagenParams::new`].
pub fn fx_call_price<T: Float>(
    spot: T,
    strike: T,
    rate_domestic: T,
    rate_foreign: T,
    volatility: T,
    tenor: T,
) -> Result<T, AnalyticalError> {
    let params =
        GarmanKohlhagenParams::new(spot, strike, rate_domestic, rate_foreign, volatility, tenor)?;
    Ok(GarmanKohlhagen::new(params).price(FxOptionType::Call))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> GarmanKohlhagenParams<f64> {
        GarmanKohlhagenParams::new(1.10, 1.12, 0.03, 0.01, 0.15, 1.0).unwrap()
    }

    #[test]
    fn test_params_invalid_spot() {
        assert!(GarmanKohlhagenParams::new(0.0, 1.12, 0.03, 0.01, 0.15, 1.0).is_err());
        assert!(GarmanKohlhagenParams::new(-1.0, 1.12, 0.03, 0.01, 0.15, 1.0).is_err());
    }

    #[test]
    fn test_params_invalid_strike() {
        assert!(matches!(
            GarmanKohlhagenParams::new(1.10, -1.12, 0.03, 0.01, 0.15, 1.0),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_params_negative_volatility_rejected_zero_allowed() {
        assert!(GarmanKohlhagenParams::new(1.10, 1.12, 0.03, 0.01, -0.15, 1.0).is_err());
        assert!(GarmanKohlhagenParams::new(1.10, 1.12, 0.03, 0.01, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_forward_rate() {
        let params = test_params();
        let expected = 1.10 * (0.02_f64).exp();
        assert!((params.forward() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_put_call_parity() {
        let params = test_params();
        let model = GarmanKohlhagen::new(params);
        let call = model.price(FxOptionType::Call);
        let put = model.price(FxOptionType::Put);

        // C - P = S e^{-rf T} - K e^{-rd T}
        let forward_diff = params.spot * (-params.rate_foreign).exp()
            - params.strike * (-params.rate_domestic).exp();
        assert!((call - put - forward_diff).abs() < 1e-10);
    }

    #[test]
    fn test_zero_tenor_is_spot_intrinsic() {
        let params = GarmanKohlhagenParams::new(1.05, 1.12, 0.03, 0.01, 0.15, 0.0).unwrap();
        let model = GarmanKohlhagen::new(params);
        assert_eq!(model.price(FxOptionType::Put), 1.12 - 1.05);
        assert_eq!(model.price(FxOptionType::Call), 0.0);
    }

    #[test]
    fn test_negative_tenor_is_spot_intrinsic() {
        let params = GarmanKohlhagenParams::new(1.20, 1.12, 0.03, 0.01, 0.15, -0.5).unwrap();
        let model = GarmanKohlhagen::new(params);
        assert_eq!(model.price(FxOptionType::Call), 1.20 - 1.12);
        assert_eq!(model.price(FxOptionType::Put), 0.0);
    }

    #[test]
    fn test_zero_volatility_discounted_forward_intrinsic() {
        let params = GarmanKohlhagenParams::new(1.10, 1.20, 0.03, 0.01, 0.0, 2.0).unwrap();
        let model = GarmanKohlhagen::new(params);
        let forward = params.forward();
        let expected = (-0.03 * 2.0_f64).exp() * (1.20 - forward).max(0.0);
        assert!((model.price(FxOptionType::Put) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_atmf_put_positive() {
        // ATMF strike: strike equals the forward.
        let spot = 1.1422_f64;
        let (rd, rf, tau) = (0.0439, 0.01827, 1.17);
        let strike = spot * ((rd - rf) * tau).exp();
        let put = fx_put_price(spot, strike, rd, rf, 0.08, tau).unwrap();
        assert!(put > 0.0);
        assert!(put < spot);
    }

    #[test]
    fn test_put_price_increases_with_volatility() {
        let low = fx_put_price(1.10, 1.12, 0.03, 0.01, 0.10, 1.0).unwrap();
        let high = fx_put_price(1.10, 1.12, 0.03, 0.01, 0.30, 1.0).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_deep_itm_put_approaches_intrinsic() {
        let params = GarmanKohlhagenParams::new(1.00, 1.30, 0.03, 0.01, 0.15, 1.0).unwrap();
        let model = GarmanKohlhagen::new(params);
        let intrinsic = params.strike * (-params.rate_domestic).exp()
            - params.spot * (-params.rate_foreign).exp();
        assert!((model.price(FxOptionType::Put) - intrinsic).abs() < 0.05);
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(128))]

        #[test]
        fn prop_put_call_parity(
            spot in 0.5_f64..2.0,
            strike in 0.5_f64..2.0,
            rd in -0.02_f64..0.10,
            rf in -0.02_f64..0.10,
            vol in 0.001_f64..0.5,
            tenor in 0.01_f64..10.0,
        ) {
            let params =
                GarmanKohlhagenParams::new(spot, strike, rd, rf, vol, tenor).unwrap();
            let model = GarmanKohlhagen::new(params);
            let call = model.price(FxOptionType::Call);
            let put = model.price(FxOptionType::Put);
            let forward_diff = spot * (-rf * tenor).exp() - strike * (-rd * tenor).exp();
            proptest::prop_assert!((call - put - forward_diff).abs() < 1e-5);
            proptest::prop_assert!(put >= -1e-12 && call >= -1e-12);
        }
    }

    #[test]
    fn test_convenience_functions_match_model() {
        let params = test_params();
        let model = GarmanKohlhagen::new(params);
        let put = fx_put_price(1.10, 1.12, 0.03, 0.01, 0.15, 1.0).unwrap();
        let call = fx_call_price(1.10, 1.12, 0.03, 0.01, 0.15, 1.0).unwrap();
        assert!((put - model.price(FxOptionType::Put)).abs() < 1e-12);
        assert!((call - model.price(FxOptionType::Call)).abs() < 1e-12);
    }
}
