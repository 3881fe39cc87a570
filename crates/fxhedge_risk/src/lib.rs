//! # FX Hedge Risk (L4: Metrics)
//!
//! Per-path performance metrics and risk aggregation.
//!
//! This crate provides:
//! - NPV, IRR, and MOIC over per-path USD cashflow vectors (Act/365)
//! - Distribution summaries with NaN filtering
//! - VaR and Expected Shortfall on a configurable loss transform
//!
//! Metric functions follow the degradation convention of the Monte
//! Carlo layer: numerically undefined outcomes on individual paths
//! (an unbracketed IRR root, an empty distribution) yield NaN sentinels
//! plus a non-fatal diagnostic rather than aborting the batch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distribution;
pub mod error;
pub mod performance;
pub mod var;

pub use distribution::{quantile, summarize, DistributionSummary};
pub use error::RiskError;
pub use performance::{
    irr, irr_by_path, moic, moic_by_path, npv, npv_by_path, terminal_value, IrrDiagnostic,
    IrrOutcome,
};
pub use var::{prob_above, prob_below, risk_summary_for_metric, var_es, LossMode, RiskSummary};
