//! Numerical routines.
//!
//! This module provides:
//! - [`solvers`]: bracketed root finding (Brent's method)

pub mod solvers;
