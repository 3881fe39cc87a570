//! # FX Hedge Pricing (L3: Monte Carlo Kernel)
//!
//! Path simulation and hedge payoff computation.
//!
//! This crate provides:
//! - A seeded RNG wrapper for reproducible simulation
//! - GBM path-ensemble generation over a business-day grid
//! - Forward and ATMF put-option hedge payoff matrices
//! - Scenario aggregation into per-path USD cashflow vectors
//!
//! The pipeline is single-threaded and purely functional: identical
//! inputs (including the seed) reproduce bit-identical ensembles, and
//! repeated runs share no mutable state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod hedges;
pub mod mc;
pub mod rng;
pub mod scenario;
