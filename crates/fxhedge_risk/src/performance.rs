//! Per-path performance metrics: NPV, IRR, MOIC.
//!
//! All time handling is Act/365 via [`DayCount::Act365`]. The `*_by_path`
//! forms apply a metric across the path dimension of a row-major
//! scenario matrix in parallel; results are numerically identical to the
//! sequential per-row application.

use fxhedge_core::math::solvers::{BrentSolver, SolverConfig};
use fxhedge_core::types::error::SolverError;
use fxhedge_core::types::{Date, DayCount};
use rayon::prelude::*;
use tracing::warn;

/// IRR search bracket. The lower end stays above -100% so the
/// discount factor base `1 + r` remains positive.
const IRR_BRACKET: (f64, f64) = (-0.999, 10.0);

/// Net present value of a dated cashflow vector at flat rate `rate`,
/// discounting from `start_date`:
///
/// ```text
/// NPV = sum_i cf_i / (1 + rate)^yearfrac(start_date, date_i)
/// ```
///
/// # Examples
///
/// ```
/// use fxhedge_core::types::Date;
/// use fxhedge_risk::performance::npv;
///
/// let start = Date::from_ymd(2025, 8, 1).unwrap();
/// let dates = [start, start.add_days(365)];
/// let value = npv(&dates, &[-100.0, 110.0], 0.05, start);
/// assert!((value - (-100.0 + 110.0 / 1.05)).abs() < 1e-12);
/// ```
pub fn npv(dates: &[Date], cashflows: &[f64], rate: f64, start_date: Date) -> f64 {
    dates
        .iter()
        .zip(cashflows)
        .map(|(&date, &cf)| {
            let yf = DayCount::Act365.year_fraction(start_date, date);
            cf / (1.0 + rate).powf(yf)
        })
        .sum()
}

/// Why an IRR came back NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrDiagnostic {
    /// NPV has the same sign at both bracket endpoints.
    NoRootBracketed,
    /// The solver hit its iteration cap without converging.
    DidNotConverge,
}

/// IRR result: the computed rate plus an optional diagnostic.
///
/// A NaN `value` always carries a diagnostic; callers can inspect it
/// programmatically instead of relying on log output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrOutcome {
    /// The internal rate of return, NaN when undefined.
    pub value: f64,
    /// Present exactly when `value` is NaN.
    pub diagnostic: Option<IrrDiagnostic>,
}

/// Internal rate of return: the flat rate `r*` with `NPV(r*) = 0`,
/// searched with Brent's method on the bracket `(-0.999, 10.0)`.
///
/// A bracket whose endpoints share a sign is a defined non-error
/// outcome: the result is NaN with [`IrrDiagnostic::NoRootBracketed`]
/// and a `tracing` warning, so batch loops over pathological paths
/// continue uninterrupted.
pub fn irr(dates: &[Date], cashflows: &[f64], start_date: Date) -> IrrOutcome {
    let solver = BrentSolver::new(SolverConfig::new(1e-10, 200));
    let f = |rate: f64| npv(dates, cashflows, rate, start_date);
    match solver.find_root(f, IRR_BRACKET.0, IRR_BRACKET.1) {
        Ok(rate) => IrrOutcome {
            value: rate,
            diagnostic: None,
        },
        Err(SolverError::NoBracket { a, b }) => {
            warn!(a, b, "IRR bracket endpoints share a sign, returning NaN");
            IrrOutcome {
                value: f64::NAN,
                diagnostic: Some(IrrDiagnostic::NoRootBracketed),
            }
        }
        Err(SolverError::MaxIterationsExceeded { iterations }) => {
            warn!(iterations, "IRR solver did not converge, returning NaN");
            IrrOutcome {
                value: f64::NAN,
                diagnostic: Some(IrrDiagnostic::DidNotConverge),
            }
        }
    }
}

/// Multiple on invested capital: `sum(inflows) / sum(|outflows|)`.
///
/// Time-agnostic. A vector without outflows divides by zero and
/// propagates the IEEE result (infinity, or NaN for an all-zero input).
pub fn moic(cashflows: &[f64]) -> f64 {
    let inflows: f64 = cashflows.iter().filter(|&&cf| cf > 0.0).sum();
    let outflows: f64 = cashflows.iter().filter(|&&cf| cf < 0.0).map(|cf| -cf).sum();
    inflows / outflows
}

/// Plain undiscounted sum of the cashflow vector.
pub fn terminal_value(cashflows: &[f64]) -> f64 {
    cashflows.iter().sum()
}

/// NPV per path over a row-major `n_paths x dates.len()` matrix.
pub fn npv_by_path(dates: &[Date], matrix: &[f64], rate: f64, start_date: Date) -> Vec<f64> {
    matrix
        .par_chunks(dates.len())
        .map(|row| npv(dates, row, rate, start_date))
        .collect()
}

/// IRR per path over a row-major matrix; unbracketed paths become NaN
/// entries within an otherwise complete vector.
pub fn irr_by_path(dates: &[Date], matrix: &[f64], start_date: Date) -> Vec<f64> {
    matrix
        .par_chunks(dates.len())
        .map(|row| irr(dates, row, start_date).value)
        .collect()
}

/// MOIC per path over a row-major matrix with `row_len` columns.
pub fn moic_by_path(matrix: &[f64], row_len: usize) -> Vec<f64> {
    matrix.par_chunks(row_len).map(moic).collect()
}
