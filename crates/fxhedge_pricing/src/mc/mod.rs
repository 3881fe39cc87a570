//! Monte Carlo path simulation.
//!
//! This module provides:
//! - [`Scheme`]: discretisation scheme selector
//! - [`PathEnsemble`]: the simulated spot matrix over a shared date grid
//! - [`simulate_gbm_paths`]: seeded GBM ensemble generation
//! - [`SimulationError`]: fail-fast validation errors

mod error;
mod paths;

pub use error::SimulationError;
pub use paths::{simulate_gbm_paths, PathEnsemble, Scheme};
