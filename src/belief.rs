//! Statistics over a history of observations.
//!
//! Every function here is a pure query over a `&[Observation]` slice; pass
//! `History::as_slice()` for the live history or `History::prefix(t)` for a
//! retrospective view. When `arm` is `Some`, observations are filtered by
//! exact arm index before aggregating.
//!
//! Mean, variance, min and max of an empty filtered set are NaN. Callers are
//! expected to guarantee at least one observation for the arm they query
//! (the strategies do so with their warm-up phase); this precondition is not
//! checked here.

use crate::history::Observation;

fn filtered_rewards<'a>(
    history: &'a [Observation],
    arm: Option<usize>,
) -> impl Iterator<Item = f64> + 'a {
    history
        .iter()
        .filter(move |observation| arm.map_or(true, |arm| observation.arm == arm))
        .map(|observation| observation.reward)
}

/// Arm indices in the order they were selected.
pub fn selected_arms(history: &[Observation]) -> Vec<usize> {
    history.iter().map(|observation| observation.arm).collect()
}

/// How often the given arm was played.
pub fn played_count(history: &[Observation], arm: usize) -> usize {
    filtered_rewards(history, Some(arm)).count()
}

/// Chronological rewards, optionally restricted to one arm.
pub fn rewards(history: &[Observation], arm: Option<usize>) -> Vec<f64> {
    filtered_rewards(history, arm).collect()
}

pub fn sum_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    filtered_rewards(history, arm).sum()
}

pub fn mean_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    let (count, sum) = filtered_rewards(history, arm)
        .fold((0usize, 0.0), |(count, sum), reward| (count + 1, sum + reward));

    sum / count as f64
}

pub fn min_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    filtered_rewards(history, arm).fold(f64::NAN, f64::min)
}

pub fn max_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    filtered_rewards(history, arm).fold(f64::NAN, f64::max)
}

/// Population variance (ddof = 0) of the filtered rewards.
pub fn var_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    let mean = mean_reward(history, arm);
    let (count, sum_sq) = filtered_rewards(history, arm).fold(
        (0usize, 0.0),
        |(count, sum_sq), reward| (count + 1, sum_sq + (reward - mean) * (reward - mean)),
    );

    sum_sq / count as f64
}

pub fn std_reward(history: &[Observation], arm: Option<usize>) -> f64 {
    var_reward(history, arm).sqrt()
}
