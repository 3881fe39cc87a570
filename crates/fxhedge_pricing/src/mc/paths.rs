//! GBM path-ensemble generation.
//!
//! Paths are simulated on the weekday grid between the start and end
//! dates with a fixed time increment `dt = 1/steps_per_year`. The fixed
//! increment deliberately ignores the true calendar gap between
//! consecutive grid points (weekends stretch the gap to three days); the
//! approximation error over long horizons is unvalidated and accepted.
//!
//! The "exact" scheme draws the log-price increments directly:
//! ```text
//! ln S(t+dt) = ln S(t) + (mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z
//! ```
//! which reproduces the exact GBM distribution at the sampled instants
//! with no discretisation bias (given the fixed-dt assumption).

use std::fmt;
use std::str::FromStr;

use fxhedge_core::types::time::{business_day_range, Date};
use fxhedge_models::models::GbmParams;
use tracing::debug;

use super::error::SimulationError;
use crate::rng::SimRng;

/// Discretisation scheme selector.
///
/// Only `Exact` is implemented; the Euler-Maruyama and Milstein
/// selectors are recognised configuration values that fail explicitly
/// instead of silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Exact log-space transition (no discretisation bias).
    #[default]
    Exact,
    /// Euler-Maruyama (recognised, not implemented).
    EulerMaruyama,
    /// Milstein (recognised, not implemented).
    Milstein,
}

impl Scheme {
    /// Returns the configuration name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Exact => "exact",
            Scheme::EulerMaruyama => "em",
            Scheme::Milstein => "milstein",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = SimulationError;

    /// Parses a scheme selector, case-insensitively.
    fn from_str(s: &str) -> Result<Self, SimulationError> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Scheme::Exact),
            "em" => Ok(Scheme::EulerMaruyama),
            "milstein" => Ok(Scheme::Milstein),
            _ => Err(SimulationError::UnknownScheme { got: s.to_string() }),
        }
    }
}

/// Simulated spot ensemble: a shared business-day grid and an
/// `n_paths x n_steps` matrix of spot levels (row-major).
///
/// Invariants: every path starts at the initial spot; all paths share
/// the same date grid. Immutable after simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEnsemble {
    dates: Vec<Date>,
    n_paths: usize,
    values: Vec<f64>,
}

impl PathEnsemble {
    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of grid points per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.dates.len()
    }

    /// The shared business-day grid.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// One full path as a slice of spot levels.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let n = self.n_steps();
        &self.values[path_idx * n..(path_idx + 1) * n]
    }

    /// Spot level for one path at one grid step.
    #[inline]
    pub fn spot(&self, path_idx: usize, step_idx: usize) -> f64 {
        self.values[path_idx * self.n_steps() + step_idx]
    }

    /// The raw row-major matrix.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of the latest grid date at or before `date` (backward
    /// alignment, pandas `pad` semantics). `None` if `date` precedes the
    /// grid start.
    pub fn index_at_or_before(&self, date: Date) -> Option<usize> {
        match self.dates.binary_search(&date) {
            Ok(idx) => Some(idx),
            Err(0) => None,
            Err(idx) => Some(idx - 1),
        }
    }
}

/// Simulates a GBM path ensemble on the business-day grid between
/// `start` and `end` (inclusive).
///
/// `dt` is fixed at `1/steps_per_year` regardless of the calendar gap
/// between consecutive grid dates. With `Some(seed)` the output is
/// bit-identical across invocations; with `None` it is intentionally
/// non-reproducible.
///
/// # Errors
///
/// - `InvalidPathCount` if `n_paths == 0`
/// - `InvalidVolatility` if `params.sigma < 0`
/// - `InvalidStepsPerYear` if `steps_per_year == 0`
/// - `DateRangeTooShort` if the grid has fewer than 2 business days
/// - `SchemeNotImplemented` for the `em` and `milstein` selectors
#[allow(clippy::too_many_arguments)]
pub fn simulate_gbm_paths(
    s0: f64,
    params: GbmParams,
    start: Date,
    end: Date,
    n_paths: usize,
    steps_per_year: u32,
    seed: Option<u64>,
    scheme: Scheme,
) -> Result<PathEnsemble, SimulationError> {
    if n_paths == 0 {
        return Err(SimulationError::InvalidPathCount { n_paths });
    }
    if params.sigma < 0.0 {
        return Err(SimulationError::InvalidVolatility {
            sigma: params.sigma,
        });
    }
    if steps_per_year == 0 {
        return Err(SimulationError::InvalidStepsPerYear);
    }

    match scheme {
        Scheme::Exact => {}
        Scheme::EulerMaruyama => {
            return Err(SimulationError::SchemeNotImplemented { scheme: "em" })
        }
        Scheme::Milstein => {
            return Err(SimulationError::SchemeNotImplemented {
                scheme: "milstein",
            })
        }
    }

    let dates = business_day_range(start, end);
    let n_steps = dates.len();
    if n_steps < 2 {
        return Err(SimulationError::DateRangeTooShort { n_days: n_steps });
    }

    debug!(n_paths, n_steps, ?seed, "simulating GBM ensemble");

    let dt = 1.0 / f64::from(steps_per_year);
    let drift_dt = params.log_drift() * dt;
    let vol_sqrt_dt = params.sigma * dt.sqrt();
    let log_s0 = s0.ln();

    let mut rng = SimRng::from_optional_seed(seed);
    let mut values = vec![0.0; n_paths * n_steps];
    let mut shocks = vec![0.0; n_steps - 1];

    for path_idx in 0..n_paths {
        rng.fill_normal(&mut shocks);

        let row = &mut values[path_idx * n_steps..(path_idx + 1) * n_steps];
        row[0] = s0;

        let mut log_s = log_s0;
        for (slot, z) in row[1..].iter_mut().zip(&shocks) {
            log_s += drift_dt + vol_sqrt_dt * z;
            *slot = log_s.exp();
        }
    }

    Ok(PathEnsemble {
        dates,
        n_paths,
        values,
    })
}
