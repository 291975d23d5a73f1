use super::errors::PolicyError;
use super::policy::{Policy, PolicyParams, argmax_first};
use crate::belief;
use crate::history::Observation;
use crate::rng::MaybeSeededRng;

use rand::Rng;
use std::collections::HashMap;

/// Epsilon-greedy selection: after playing every arm once, explore a random
/// arm with probability epsilon, otherwise exploit the arm with the highest
/// observed mean reward.
#[derive(Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
    name: &'static str,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            epsilon,
            name: "Eps. Greedy",
            rng: MaybeSeededRng::new(seed),
        })
    }

    /// Pure exploitation after warm-up: epsilon-greedy with `epsilon = 0`.
    pub fn max_mean(seed: Option<u64>) -> Self {
        Self {
            epsilon: 0.0,
            name: "Greedy Max Mean",
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn params(&self) -> Option<PolicyParams> {
        Some(HashMap::from([("epsilon", self.epsilon)]))
    }

    fn select_arm(&mut self, history: &[Observation], step: usize, n_arms: usize) -> usize {
        if step < n_arms {
            // warm-up: one forced pull per arm
            step
        } else if self.rng.get_rng().random::<f64>() < self.epsilon {
            // explore
            self.rng.get_rng().random_range(0..n_arms)
        } else {
            // exploit
            argmax_first((0..n_arms).map(|arm| belief::mean_reward(history, Some(arm))))
        }
    }
}
