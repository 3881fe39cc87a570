//! # FX Hedge Models (L2: Analytics)
//!
//! Stochastic model parameters and closed-form pricing.
//!
//! This crate provides:
//! - GBM parameters and their historical estimation (calibration)
//! - Standard normal distribution functions
//! - The Garman-Kohlhagen closed form for European FX options
//! - The two-anchor ATM volatility curve

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod calibration;
pub mod models;
pub mod vol;
