//! Analytical pricing formulas.
//!
//! This module provides:
//! - [`distributions`]: standard normal CDF/PDF
//! - [`garman_kohlhagen`]: the Garman-Kohlhagen FX option closed form
//! - [`AnalyticalError`]: errors from analytical pricing

mod error;

pub mod distributions;
pub mod garman_kohlhagen;

pub use error::AnalyticalError;
pub use garman_kohlhagen::{
    fx_call_price, fx_put_price, FxOptionType, GarmanKohlhagen, GarmanKohlhagenParams,
};
