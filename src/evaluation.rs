//! Experiment driver and tabulation.
//!
//! Drives every configured strategy over `n_repeats` independent runs,
//! keeps the full per-run histories, and flattens them into tidy rows (one
//! per run, strategy and step-prefix) ready for export or summary.

use crate::belief;
use crate::config::ExperimentConfig;
use crate::environment::{Environment, StochasticEnvironment};
use crate::errors::ExportError;
use crate::history::History;
use crate::metrics;
use crate::strategies::errors::StrategyError;
use crate::strategies::{PolicyParams, Strategy};

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Outcome of one strategy over one run: its full history plus the ground
/// truth of the environment it played against.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub id: Uuid,
    pub run: usize,
    pub strategy: String,
    pub params: Option<PolicyParams>,
    pub best_arm: usize,
    pub best_mean: f64,
    pub history: History,
}

impl RunRecord {
    /// Strategy name with its parameters appended, to tell apart two
    /// configurations of the same policy.
    pub fn full_name(&self) -> String {
        match &self.params {
            Some(params) => {
                let mut pairs: Vec<_> = params.iter().collect();
                pairs.sort_by_key(|(key, _)| **key);
                let rendered = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}={value}"))
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("{} | {}", self.strategy, rendered)
            }
            None => self.strategy.clone(),
        }
    }
}

/// Run every configured strategy `n_repeats` times for `n_plays` steps.
///
/// Each run builds a fresh environment and a fresh strategy; within one run
/// index every strategy gets the same seed, so they face identically
/// distributed reward streams (`seed + run` when a base seed is set).
pub fn run_experiments(experiment: &ExperimentConfig) -> Result<Vec<RunRecord>, StrategyError> {
    let mut records = Vec::with_capacity(experiment.n_repeats * experiment.strategies.len());

    for run in 0..experiment.n_repeats {
        let seed = experiment.seed.map(|seed| seed + run as u64);

        for policy_type in &experiment.strategies {
            let mut environment = StochasticEnvironment::new(&experiment.arms, seed)?;
            let best_arm = environment.best_arm();
            let best_mean = environment.best_mean();

            let policy = policy_type.clone().into_policy(seed)?;
            let mut strategy = Strategy::new(&mut environment, policy)?;
            for _ in 0..experiment.n_plays {
                strategy.step()?;
            }

            info!(
                run,
                strategy = strategy.name(),
                steps = strategy.step_count(),
                "Finished run"
            );

            records.push(RunRecord {
                id: Uuid::new_v4(),
                run,
                strategy: strategy.name().to_string(),
                params: strategy.params(),
                best_arm,
                best_mean,
                history: strategy.history().clone(),
            });
        }
    }

    Ok(records)
}

/// One tidy row per (run, strategy, step-prefix).
#[derive(Debug, Serialize)]
pub struct StatRecord {
    pub strategy: String,
    pub name: String,
    pub run: usize,
    pub step: usize,
    pub regret: f64,
    pub regret_avg: f64,
    pub frac_best_arm: f64,
    pub reward: f64,
    pub reward_avg: f64,
}

pub fn collect_statistics(records: &[RunRecord]) -> Vec<StatRecord> {
    let mut rows = Vec::new();

    for record in records {
        let name = record.full_name();
        for step in 1..=record.history.len() {
            let prefix = record.history.prefix(step);

            rows.push(StatRecord {
                strategy: record.strategy.clone(),
                name: name.clone(),
                run: record.run,
                step,
                regret: metrics::regret(prefix, record.best_mean),
                regret_avg: metrics::regret_avg(prefix, record.best_mean),
                frac_best_arm: metrics::frac_of_best_arm(prefix, record.best_arm),
                reward: belief::sum_reward(prefix, None),
                reward_avg: belief::mean_reward(prefix, None),
            });
        }
    }

    rows
}

/// End-of-run metrics averaged over repeated runs, one row per strategy
/// configuration, in first-seen order.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub runs: usize,
    pub regret: f64,
    pub regret_avg: f64,
    pub frac_best_arm: f64,
}

pub fn summarize(records: &[RunRecord]) -> Vec<SummaryRow> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (usize, f64, f64, f64)> = HashMap::new();

    for record in records {
        let name = record.full_name();
        if !totals.contains_key(&name) {
            order.push(name.clone());
        }

        let history = record.history.as_slice();
        let entry = totals.entry(name).or_insert((0, 0.0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += metrics::regret(history, record.best_mean);
        entry.2 += metrics::regret_avg(history, record.best_mean);
        entry.3 += metrics::frac_of_best_arm(history, record.best_arm);
    }

    order
        .into_iter()
        .map(|name| {
            let (runs, regret, regret_avg, frac_best_arm) = totals[&name];
            SummaryRow {
                name,
                runs,
                regret: regret / runs as f64,
                regret_avg: regret_avg / runs as f64,
                frac_best_arm: frac_best_arm / runs as f64,
            }
        })
        .collect()
}

pub fn write_statistics(path: &Path, statistics: &[StatRecord]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, statistics)?;

    Ok(())
}
