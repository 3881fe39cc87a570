//! Integration tests for the Monte Carlo simulator: seeded determinism
//! and distributional correctness of the exact scheme.

use fxhedge_core::types::Date;
use fxhedge_models::analytical::distributions::norm_cdf;
use fxhedge_models::models::GbmParams;
use fxhedge_pricing::mc::{simulate_gbm_paths, PathEnsemble, Scheme};
use proptest::prelude::*;

const S0: f64 = 1.1422;

fn simulate(seed: Option<u64>, n_paths: usize, mu: f64, sigma: f64) -> PathEnsemble {
    simulate_gbm_paths(
        S0,
        GbmParams { mu, sigma },
        Date::from_ymd(2025, 8, 1).unwrap(),
        Date::from_ymd(2026, 7, 31).unwrap(),
        n_paths,
        252,
        seed,
        Scheme::Exact,
    )
    .unwrap()
}

#[test]
fn seeded_runs_are_bit_identical() {
    let a = simulate(Some(2024), 500, 0.0, 0.08);
    let b = simulate(Some(2024), 500, 0.0, 0.08);
    assert_eq!(a.values(), b.values());
}

#[test]
fn terminal_log_returns_are_normal() {
    // Kolmogorov-Smirnov against the model distribution of log(S_T/S0),
    // at a loose threshold. With n = 20_000 the 1% critical value of
    // D * sqrt(n) is about 1.63, i.e. D ~ 0.0115.
    let (mu, sigma) = (0.03, 0.08);
    let ensemble = simulate(Some(7), 20_000, mu, sigma);
    let n = ensemble.n_paths();
    let last = ensemble.n_steps() - 1;

    let horizon = last as f64 / 252.0;
    let mean = (mu - 0.5 * sigma * sigma) * horizon;
    let std = sigma * horizon.sqrt();

    let mut log_returns: Vec<f64> = (0..n)
        .map(|p| (ensemble.spot(p, last) / S0).ln())
        .collect();
    log_returns.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut d_stat: f64 = 0.0;
    for (i, &x) in log_returns.iter().enumerate() {
        let model = norm_cdf((x - mean) / std);
        let above = (i + 1) as f64 / n as f64 - model;
        let below = model - i as f64 / n as f64;
        d_stat = d_stat.max(above.max(below));
    }
    assert!(
        d_stat < 0.02,
        "KS statistic {d_stat} too large for normal log returns"
    );
}

#[test]
fn sample_moments_match_model() {
    let (mu, sigma) = (0.0, 0.08);
    let ensemble = simulate(Some(99), 50_000, mu, sigma);
    let n = ensemble.n_paths();
    let last = ensemble.n_steps() - 1;
    let horizon = last as f64 / 252.0;

    let log_returns: Vec<f64> = (0..n)
        .map(|p| (ensemble.spot(p, last) / S0).ln())
        .collect();
    let mean = log_returns.iter().sum::<f64>() / n as f64;
    let var = log_returns.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    let model_mean = (mu - 0.5 * sigma * sigma) * horizon;
    let model_var = sigma * sigma * horizon;
    // Standard error of the mean is sigma*sqrt(T)/sqrt(n) ~ 3.5e-4.
    assert!((mean - model_mean).abs() < 1.5e-3);
    assert!((var / model_var - 1.0).abs() < 0.03);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_seeded_determinism(seed in any::<u64>()) {
        let a = simulate(Some(seed), 20, 0.0, 0.1);
        let b = simulate(Some(seed), 20, 0.0, 0.1);
        prop_assert_eq!(a.values(), b.values());
    }

    #[test]
    fn prop_spots_stay_positive(
        seed in any::<u64>(),
        sigma in 0.0_f64..0.6,
        mu in -0.2_f64..0.2,
    ) {
        let ensemble = simulate(Some(seed), 10, mu, sigma);
        prop_assert!(ensemble.values().iter().all(|&s| s > 0.0));
    }
}
