use super::errors::StrategyError;
use super::policy::{Policy, PolicyParams};
use crate::environment::Environment;
use crate::history::{History, Observation};

/// State machine driving one policy against one environment.
///
/// Each `step` asks the policy for an arm, plays it, and appends the outcome
/// to the owned history. The environment is borrowed, not owned; one caller
/// drives one instance, so `step_count() == history().len()` holds after
/// every step.
pub struct Strategy<'e> {
    environment: &'e mut dyn Environment,
    policy: Box<dyn Policy>,
    history: History,
    step: usize,
}

impl<'e> Strategy<'e> {
    pub fn new(
        environment: &'e mut dyn Environment,
        policy: Box<dyn Policy>,
    ) -> Result<Self, StrategyError> {
        if environment.n_arms() == 0 {
            return Err(StrategyError::NoArms);
        }

        Ok(Self {
            environment,
            policy,
            history: History::new(),
            step: 0,
        })
    }

    /// Select an arm, play it, record the outcome.
    ///
    /// An environment failure propagates unchanged and leaves the history
    /// and step count untouched; the observation is only appended after a
    /// successful play.
    pub fn step(&mut self) -> Result<Observation, StrategyError> {
        let arm = self
            .policy
            .select_arm(self.history.as_slice(), self.step, self.environment.n_arms());
        let reward = self.environment.play(arm)?;

        let observation = Observation { arm, reward };
        self.history.record(observation);
        self.step += 1;

        Ok(observation)
    }

    pub fn name(&self) -> &'static str {
        self.policy.name()
    }

    pub fn params(&self) -> Option<PolicyParams> {
        self.policy.params()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn step_count(&self) -> usize {
        self.step
    }
}
