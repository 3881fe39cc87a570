//! Stochastic model parameter types.

pub mod gbm;

pub use gbm::GbmParams;
