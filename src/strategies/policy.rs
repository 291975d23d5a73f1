use super::baseline::{Random, RoundRobin};
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::ucb::{Ucb1, Ucb1Tuned};
use crate::history::Observation;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type PolicyParams = HashMap<&'static str, f64>;

/// A decision policy: the single polymorphic hook of a strategy.
///
/// `select_arm` must return an index in `[0, n_arms)` and may depend only on
/// the observed history, the step count, the arm count, the policy's own
/// parameters and its own randomness stream. Policies never see the
/// environment, so they cannot peek at true means.
pub trait Policy {
    fn name(&self) -> &'static str;

    fn params(&self) -> Option<PolicyParams> {
        None
    }

    fn select_arm(&mut self, history: &[Observation], step: usize, n_arms: usize) -> usize;
}

/// Config-facing description of a policy, turned into a boxed instance at
/// strategy construction.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum PolicyType {
    RoundRobin,
    Random,
    EpsilonGreedy {
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
    MaxMean,
    Ucb1,
    Ucb1Tuned,
}

fn default_epsilon() -> f64 {
    0.1
}

impl PolicyType {
    pub fn into_policy(self, seed: Option<u64>) -> Result<Box<dyn Policy>, PolicyError> {
        Ok(match self {
            PolicyType::RoundRobin => Box::new(RoundRobin::new()),
            PolicyType::Random => Box::new(Random::new(seed)),
            PolicyType::EpsilonGreedy { epsilon } => Box::new(EpsilonGreedy::new(epsilon, seed)?),
            PolicyType::MaxMean => Box::new(EpsilonGreedy::max_mean(seed)),
            PolicyType::Ucb1 => Box::new(Ucb1::new()),
            PolicyType::Ucb1Tuned => Box::new(Ucb1Tuned::new()),
        })
    }
}

/// Index of the first score attaining the maximum, so ties resolve to the
/// lowest arm index.
pub(super) fn argmax_first(scores: impl IntoIterator<Item = f64>) -> usize {
    let mut best = f64::NEG_INFINITY;
    let mut best_index = 0;
    for (index, score) in scores.into_iter().enumerate() {
        if score > best {
            best = score;
            best_index = index;
        }
    }
    best_index
}
