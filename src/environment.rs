use crate::rng::MaybeSeededRng;

use rand::distr::{Bernoulli, Distribution};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Invalid arm distribution: {0}")]
    InvalidDistribution(String),
}

/// The reward-generating side of a bandit problem.
///
/// Strategies only ever call `play`; `mean`, `best_arm` and `best_mean`
/// expose ground truth for the evaluation layer and must stay out of any
/// selection logic.
pub trait Environment {
    fn n_arms(&self) -> usize;

    /// Sample a reward from the given arm.
    fn play(&mut self, arm: usize) -> Result<f64, EnvironmentError>;

    /// True expected reward of the given arm.
    fn mean(&self, arm: usize) -> f64;

    /// Index of the arm with the highest true mean, lowest index on ties.
    fn best_arm(&self) -> usize {
        let mut best = f64::NEG_INFINITY;
        let mut best_arm = 0;
        for arm in 0..self.n_arms() {
            if self.mean(arm) > best {
                best = self.mean(arm);
                best_arm = arm;
            }
        }
        best_arm
    }

    fn best_mean(&self) -> f64 {
        self.mean(self.best_arm())
    }
}

/// Declarative description of one arm's reward distribution, as it appears
/// in the experiment configuration.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ArmSpec {
    Normal { mean: f64, std: f64 },
    Bernoulli { p: f64 },
}

impl ArmSpec {
    fn mean(&self) -> f64 {
        match self {
            ArmSpec::Normal { mean, .. } => *mean,
            ArmSpec::Bernoulli { p } => *p,
        }
    }
}

enum ArmSampler {
    Normal(Normal<f64>),
    Bernoulli(Bernoulli),
}

impl ArmSampler {
    fn new(spec: &ArmSpec) -> Result<Self, EnvironmentError> {
        match *spec {
            ArmSpec::Normal { mean, std } => Normal::new(mean, std)
                .map(ArmSampler::Normal)
                .map_err(|err| EnvironmentError::InvalidDistribution(err.to_string())),
            ArmSpec::Bernoulli { p } => Bernoulli::new(p)
                .map(ArmSampler::Bernoulli)
                .map_err(|err| EnvironmentError::InvalidDistribution(err.to_string())),
        }
    }

    fn sample(&self, rng: &mut MaybeSeededRng) -> f64 {
        match self {
            ArmSampler::Normal(normal) => normal.sample(rng.get_rng()),
            ArmSampler::Bernoulli(bernoulli) => {
                if bernoulli.sample(rng.get_rng()) { 1.0 } else { 0.0 }
            }
        }
    }
}

/// Environment sampling rewards from per-arm probability distributions,
/// with its own randomness stream.
pub struct StochasticEnvironment {
    arms: Vec<ArmSampler>,
    means: Vec<f64>,
    rng: MaybeSeededRng,
}

impl StochasticEnvironment {
    pub fn new(specs: &[ArmSpec], seed: Option<u64>) -> Result<Self, EnvironmentError> {
        let arms = specs
            .iter()
            .map(ArmSampler::new)
            .collect::<Result<Vec<_>, _>>()?;
        let means = specs.iter().map(ArmSpec::mean).collect();

        Ok(Self {
            arms,
            means,
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl Environment for StochasticEnvironment {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn play(&mut self, arm: usize) -> Result<f64, EnvironmentError> {
        let sampler = self
            .arms
            .get(arm)
            .ok_or(EnvironmentError::ArmNotFound(arm))?;

        Ok(sampler.sample(&mut self.rng))
    }

    fn mean(&self, arm: usize) -> f64 {
        self.means[arm]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn degenerate_normal_returns_its_mean() {
        let specs = [
            ArmSpec::Normal { mean: 1.0, std: 0.0 },
            ArmSpec::Normal { mean: 2.0, std: 0.0 },
        ];
        let mut environment = StochasticEnvironment::new(&specs, Some(SEED)).unwrap();

        assert_eq!(environment.play(0).unwrap(), 1.0);
        assert_eq!(environment.play(1).unwrap(), 2.0);
    }

    #[test]
    fn ground_truth_matches_specs() {
        let specs = [
            ArmSpec::Normal { mean: 1.0, std: 1.0 },
            ArmSpec::Bernoulli { p: 0.3 },
            ArmSpec::Normal { mean: 1.5, std: 0.5 },
        ];
        let environment = StochasticEnvironment::new(&specs, Some(SEED)).unwrap();

        assert_eq!(environment.n_arms(), 3);
        assert_eq!(environment.mean(1), 0.3);
        assert_eq!(environment.best_arm(), 2);
        assert_eq!(environment.best_mean(), 1.5);
    }

    #[test]
    fn best_arm_ties_resolve_to_lowest_index() {
        let specs = [
            ArmSpec::Normal { mean: 1.0, std: 1.0 },
            ArmSpec::Normal { mean: 1.0, std: 2.0 },
        ];
        let environment = StochasticEnvironment::new(&specs, Some(SEED)).unwrap();
        assert_eq!(environment.best_arm(), 0);
    }

    #[test]
    fn bernoulli_rewards_are_binary() {
        let specs = [ArmSpec::Bernoulli { p: 0.5 }];
        let mut environment = StochasticEnvironment::new(&specs, Some(SEED)).unwrap();

        for _ in 0..20 {
            let reward = environment.play(0).unwrap();
            assert!(reward == 0.0 || reward == 1.0);
        }
    }

    #[test]
    fn unknown_arm_fails() {
        let specs = [ArmSpec::Bernoulli { p: 0.5 }];
        let mut environment = StochasticEnvironment::new(&specs, Some(SEED)).unwrap();
        assert!(environment.play(1).is_err());
    }

    #[test]
    fn invalid_distributions_fail_at_construction() {
        let negative_std = [ArmSpec::Normal { mean: 0.0, std: -1.0 }];
        assert!(StochasticEnvironment::new(&negative_std, Some(SEED)).is_err());

        let bad_probability = [ArmSpec::Bernoulli { p: 1.5 }];
        assert!(StochasticEnvironment::new(&bad_probability, Some(SEED)).is_err());
    }
}
