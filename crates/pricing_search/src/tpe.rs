//! Tree-structured Parzen Estimator sampling over a search space.
//!
//! The sampler draws uniformly for a startup phase, then splits observed
//! trials into a good set (lowest scores, at the `gamma` quantile) and a bad
//! set. Each variable gets a pair of Gaussian Parzen mixtures fitted over
//! the good and bad values; candidates are drawn from the good mixture and
//! the draw maximizing the good/bad density ratio wins. Variables are
//! modeled independently.
//!
//! All randomness comes from one owned, explicitly seeded generator, so a
//! fixed seed reproduces the exact proposal sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::space::{Candidate, SearchSpace, VarKind};

/// Tuning knobs for [`TpeSampler`].
#[derive(Debug, Clone, Copy)]
pub struct TpeConfig {
    /// Trials sampled uniformly at random before the Parzen model kicks in.
    pub n_startup_trials: usize,
    /// Fraction of observed trials considered "good".
    pub gamma: f64,
    /// Candidate draws per variable when maximizing the density ratio.
    pub n_candidates: usize,
}

impl Default for TpeConfig {
    fn default() -> Self {
        Self {
            n_startup_trials: 10,
            gamma: 0.25,
            n_candidates: 24,
        }
    }
}

/// Sequential model-based sampler proposing one candidate per trial.
#[derive(Debug)]
pub struct TpeSampler {
    config: TpeConfig,
    rng: StdRng,
}

impl TpeSampler {
    pub fn new(config: TpeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Propose the next candidate given all observed (candidate, score)
    /// pairs. Scores are minimized: lower is better.
    pub fn propose(&mut self, space: &SearchSpace, history: &[(Candidate, f64)]) -> Candidate {
        if history.len() < self.config.n_startup_trials.max(2) {
            return self.sample_uniform(space);
        }

        let mut order: Vec<usize> = (0..history.len()).collect();
        order.sort_by(|&a, &b| {
            history[a]
                .1
                .partial_cmp(&history[b].1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let n_good = ((history.len() as f64 * self.config.gamma).ceil() as usize)
            .clamp(1, history.len() - 1);
        let (good, bad) = order.split_at(n_good);

        let values = space
            .vars()
            .iter()
            .enumerate()
            .map(|(var_idx, spec)| {
                let good_values: Vec<f64> =
                    good.iter().map(|&i| history[i].0.values[var_idx]).collect();
                let bad_values: Vec<f64> =
                    bad.iter().map(|&i| history[i].0.values[var_idx]).collect();
                self.sample_variable(&spec.kind, &good_values, &bad_values)
            })
            .collect();

        Candidate { values }
    }

    fn sample_uniform(&mut self, space: &SearchSpace) -> Candidate {
        let values = space
            .vars()
            .iter()
            .map(|spec| {
                let raw = self.rng.gen_range(spec.kind.low()..=spec.kind.high());
                spec.kind.snap(raw)
            })
            .collect();
        Candidate { values }
    }

    fn sample_variable(&mut self, kind: &VarKind, good: &[f64], bad: &[f64]) -> f64 {
        let (low, high) = (kind.low(), kind.high());
        let good_bandwidth = parzen_bandwidth(low, high, good.len());
        let bad_bandwidth = parzen_bandwidth(low, high, bad.len());

        let mut best_value = kind.snap((low + high) / 2.0);
        let mut best_ratio = f64::NEG_INFINITY;

        for _ in 0..self.config.n_candidates.max(1) {
            let center = good[self.rng.gen_range(0..good.len())];
            let raw = Normal::new(center, good_bandwidth)
                .map(|normal| normal.sample(&mut self.rng))
                .unwrap_or(center);
            let value = kind.snap(raw);

            let ratio = log_mean_density(value, good, good_bandwidth)
                - log_mean_density(value, bad, bad_bandwidth);
            if ratio > best_ratio {
                best_ratio = ratio;
                best_value = value;
            }
        }

        best_value
    }
}

/// Kernel width scaled to the variable span and shrinking with observations.
fn parzen_bandwidth(low: f64, high: f64, observations: usize) -> f64 {
    let span = (high - low).abs().max(f64::EPSILON);
    let shrink = (observations.max(1) as f64).sqrt();
    (span / shrink).max(span * 1e-3)
}

/// Log of the mean Gaussian kernel density at `x`. An empty center set is
/// treated as an uninformative (flat) density.
fn log_mean_density(x: f64, centers: &[f64], bandwidth: f64) -> f64 {
    if centers.is_empty() {
        return 0.0;
    }
    let mean_density = centers
        .iter()
        .map(|center| {
            let z = (x - center) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        / (centers.len() as f64 * bandwidth);
    (mean_density + 1e-12).ln()
}
