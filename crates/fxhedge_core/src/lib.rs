//! # FX Hedge Core (L1: Foundation)
//!
//! Foundation layer for the fxhedge workspace.
//!
//! This crate provides:
//! - Date handling and the ACT/365 day-count convention
//! - Business-day grid generation for simulation date axes
//! - Market data containers (spot quote series)
//! - Cashflow schedules with optional upfront premium rows
//! - The immutable valuation configuration struct
//! - Root-finding solvers (Brent's method)
//!
//! ## Design Principles
//!
//! - **Explicit parameters**: configuration is a plain value passed into
//!   pure functions, never process-wide state
//! - **Fail-fast validation**: constructors reject malformed inputs with
//!   typed errors before any computation runs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;
