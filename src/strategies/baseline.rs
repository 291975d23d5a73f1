use super::policy::Policy;
use crate::history::Observation;
use crate::rng::MaybeSeededRng;

use rand::Rng;

/// Plays one arm after the other, wrapping around. Fully deterministic.
#[derive(Debug, Default)]
pub struct RoundRobin;

impl RoundRobin {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn select_arm(&mut self, _history: &[Observation], step: usize, n_arms: usize) -> usize {
        step % n_arms
    }
}

/// Plays a uniformly random arm on every step.
#[derive(Debug)]
pub struct Random {
    rng: MaybeSeededRng,
}

impl Random {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for Random {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn select_arm(&mut self, _history: &[Observation], _step: usize, n_arms: usize) -> usize {
        self.rng.get_rng().random_range(0..n_arms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn round_robin_cycles_through_arms() {
        let mut policy = RoundRobin::new();
        let arms: Vec<usize> = (0..7).map(|step| policy.select_arm(&[], step, 3)).collect();
        assert_eq!(arms, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn random_stays_in_range() {
        let mut policy = Random::new(Some(SEED));
        for step in 0..100 {
            assert!(policy.select_arm(&[], step, 5) < 5);
        }
    }

    #[test]
    fn random_is_reproducible_with_the_same_seed() {
        let mut a = Random::new(Some(SEED));
        let mut b = Random::new(Some(SEED));

        let xs: Vec<usize> = (0..50).map(|step| a.select_arm(&[], step, 4)).collect();
        let ys: Vec<usize> = (0..50).map(|step| b.select_arm(&[], step, 4)).collect();
        assert_eq!(xs, ys);
    }
}
