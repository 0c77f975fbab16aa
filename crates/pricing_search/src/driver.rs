//! Search driver: propose → evaluate → observe over a fixed trial budget.
//!
//! The loop is sequential by default because each proposal depends on every
//! previously observed score. With `batch_size > 1` the driver proposes a
//! whole batch from the current belief, evaluates it in parallel, and then
//! performs one combined observe; the sampler state is only ever touched by
//! the driver thread.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use pricing_core::decision::Decision;
use pricing_core::objective::{DecisionObjective, INFEASIBLE_PENALTY};
use rayon::prelude::*;
use serde::Serialize;

use crate::space::{Candidate, SearchSpace};
use crate::tpe::{TpeConfig, TpeSampler};

/// Configuration for one optimization run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Fixed trial budget; the run always terminates after this many
    /// evaluations (or earlier on `max_duration`).
    pub n_trials: usize,
    /// Seed for the sampler; fixing it makes the whole run reproducible.
    pub seed: u64,
    /// Candidates proposed per belief update. 1 means fully sequential.
    pub batch_size: usize,
    /// Optional wall-clock cutoff; the best-so-far decision is still
    /// returned when it fires.
    pub max_duration: Option<Duration>,
    pub show_progress: bool,
    pub sampler: TpeConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n_trials: 300,
            seed: 42,
            batch_size: 1,
            max_duration: None,
            show_progress: false,
            sampler: TpeConfig::default(),
        }
    }
}

/// One evaluated trial.
#[derive(Debug, Clone, Serialize)]
pub struct TrialRecord {
    pub index: usize,
    pub decision: Decision,
    pub score: f64,
}

/// Result of a finished run: the best observed decision plus the full trial
/// history for the reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub best_decision: Decision,
    /// Objective value of the best decision (negated profit, or the
    /// infeasibility sentinel if nothing feasible was found).
    pub best_score: f64,
    pub trials_run: usize,
    pub history: Vec<TrialRecord>,
}

impl SearchOutcome {
    /// Expected profit of the best decision.
    pub fn expected_profit(&self) -> f64 {
        -self.best_score
    }

    /// Whether the best observed decision satisfies the constraints.
    pub fn best_is_feasible(&self) -> bool {
        self.best_score < INFEASIBLE_PENALTY
    }
}

/// Run the search loop against an objective.
///
/// Always returns the best decision observed across all evaluated trials;
/// exhausting the budget is normal termination, not an error.
pub fn run_search<O: DecisionObjective>(
    objective: &O,
    space: &SearchSpace,
    config: &SearchConfig,
) -> SearchOutcome {
    let n_trials = config.n_trials.max(1);
    let batch_size = config.batch_size.max(1);

    let mut sampler = TpeSampler::new(config.sampler, config.seed);
    let mut history: Vec<(Candidate, f64)> = Vec::with_capacity(n_trials.min(4096));
    let mut records: Vec<TrialRecord> = Vec::with_capacity(n_trials.min(4096));

    let progress = if config.show_progress {
        let bar = ProgressBar::new(n_trials as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .expect("static progress template is valid")
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let started = Instant::now();
    while records.len() < n_trials {
        // Always evaluate at least one trial so the run can report a result.
        if !records.is_empty() {
            if let Some(limit) = config.max_duration {
                if started.elapsed() >= limit {
                    tracing::info!(
                        trials_run = records.len(),
                        budget = n_trials,
                        "wall-clock cutoff reached, returning best so far"
                    );
                    break;
                }
            }
        }

        let batch = batch_size.min(n_trials - records.len());
        let candidates: Vec<Candidate> = (0..batch)
            .map(|_| sampler.propose(space, &history))
            .collect();

        let scores: Vec<f64> = if batch > 1 {
            // Surrogates and parameters are read-only here; only the sampler
            // belief is mutable and it stays on this thread.
            candidates
                .par_iter()
                .map(|candidate| objective.score(&space.decode(candidate)))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| objective.score(&space.decode(candidate)))
                .collect()
        };

        for (candidate, score) in candidates.into_iter().zip(scores) {
            let index = records.len();
            records.push(TrialRecord {
                index,
                decision: space.decode(&candidate),
                score,
            });
            history.push((candidate, score));
            if let Some(bar) = &progress {
                bar.inc(1);
            }
        }
    }

    if let Some(bar) = &progress {
        bar.finish_with_message("search complete");
    }

    let best_index = records
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
        .expect("at least one trial is always evaluated");

    let best = &records[best_index];
    tracing::info!(
        trials_run = records.len(),
        best_score = best.score,
        "search terminated"
    );

    SearchOutcome {
        best_decision: best.decision.clone(),
        best_score: best.score,
        trials_run: records.len(),
        history: records,
    }
}
