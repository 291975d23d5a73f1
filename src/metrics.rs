//! Regret and exploitation metrics derived from a history plus environment
//! ground truth. Stateless, like the belief queries; strategies never call
//! these (they would leak the true means).

use crate::belief;
use crate::history::Observation;

/// Cumulative regret: `T * best_mean - sum of sampled rewards`.
pub fn regret(history: &[Observation], best_mean: f64) -> f64 {
    history.len() as f64 * best_mean - belief::sum_reward(history, None)
}

/// Regret per step. NaN on an empty history.
pub fn regret_avg(history: &[Observation], best_mean: f64) -> f64 {
    regret(history, best_mean) / history.len() as f64
}

/// Fraction of steps that played the best arm. NaN on an empty history.
pub fn frac_of_best_arm(history: &[Observation], best_arm: usize) -> f64 {
    belief::played_count(history, best_arm) as f64 / history.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observations(pairs: &[(usize, f64)]) -> Vec<Observation> {
        pairs
            .iter()
            .map(|&(arm, reward)| Observation { arm, reward })
            .collect()
    }

    #[test]
    fn regret_against_best_mean() {
        let history = observations(&[(0, 1.0), (1, 2.0), (0, 0.5)]);
        assert_eq!(regret(&history, 2.0), 3.0 * 2.0 - 3.5);
    }

    #[test]
    fn regret_avg_divides_by_steps() {
        let history = observations(&[(0, 1.0), (1, 2.0), (0, 0.5)]);
        assert_eq!(regret_avg(&history, 2.0), 2.5 / 3.0);
    }

    #[test]
    fn regret_avg_of_empty_history_is_nan() {
        assert!(regret_avg(&[], 1.0).is_nan());
    }

    #[test]
    fn frac_of_best_arm_counts_plays() {
        let history = observations(&[(0, 0.1), (1, 0.2), (0, 0.3), (0, 0.4)]);
        assert_eq!(frac_of_best_arm(&history, 0), 0.75);
        assert_eq!(frac_of_best_arm(&history, 1), 0.25);
    }
}
