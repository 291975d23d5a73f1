//! Upper confidence bound policies.
//!
//! Both follow Auer et al., "Finite-time Analysis of the Multiarmed Bandit
//! Problem", 2002. After the warm-up, every step scores each arm as its
//! observed mean plus an uncertainty bonus that shrinks with the number of
//! times the arm was played.

use super::policy::{Policy, argmax_first};
use crate::belief;
use crate::history::Observation;

/// UCB1: `mean(arm) + sqrt(2 ln t / n(arm))`.
#[derive(Debug, Default)]
pub struct Ucb1;

impl Ucb1 {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for Ucb1 {
    fn name(&self) -> &'static str {
        "UCB1"
    }

    fn select_arm(&mut self, history: &[Observation], step: usize, n_arms: usize) -> usize {
        if step < n_arms {
            return step;
        }

        let t = history.len() as f64;
        argmax_first((0..n_arms).map(|arm| {
            let played = belief::played_count(history, arm) as f64;
            belief::mean_reward(history, Some(arm)) + (2.0 * t.ln() / played).sqrt()
        }))
    }
}

/// UCB1-Tuned: the bonus is capped by an estimate of the arm's reward
/// variance, `sqrt((ln t / n(arm)) * min(1/4, V(arm)))` with
/// `V(arm) = var(arm) + sqrt(2 ln t / n(arm))`.
#[derive(Debug, Default)]
pub struct Ucb1Tuned;

impl Ucb1Tuned {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for Ucb1Tuned {
    fn name(&self) -> &'static str {
        "UCB1-Tuned"
    }

    fn select_arm(&mut self, history: &[Observation], step: usize, n_arms: usize) -> usize {
        if step < n_arms {
            return step;
        }

        let t = history.len() as f64;
        argmax_first((0..n_arms).map(|arm| {
            let played = belief::played_count(history, arm) as f64;
            let variance_bound =
                belief::var_reward(history, Some(arm)) + (2.0 * t.ln() / played).sqrt();

            belief::mean_reward(history, Some(arm))
                + (t.ln() / played * variance_bound.min(0.25)).sqrt()
        }))
    }
}
