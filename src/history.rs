use serde::Serialize;

/// One (arm, reward) outcome of a single step. Produced exactly once per
/// step, never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observation {
    pub arm: usize,
    pub reward: f64,
}

/// Append-only record of everything a strategy has observed, in
/// chronological order. Only the strategy state machine appends; everyone
/// else (belief queries, metrics, reporting) reads.
#[derive(Clone, Debug, Default, Serialize)]
pub struct History {
    observations: Vec<Observation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub(crate) fn record(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    /// Borrowed view of the first `t` observations, for retrospective
    /// analysis of a partially played run. Clamped to the full history.
    pub fn prefix(&self, t: usize) -> &[Observation] {
        &self.observations[..t.min(self.observations.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(Observation { arm: 0, reward: 1.0 });
        history.record(Observation { arm: 1, reward: 2.0 });

        assert_eq!(history.len(), 2);
        assert_eq!(history.as_slice()[1], Observation { arm: 1, reward: 2.0 });
    }

    #[test]
    fn prefix_views_do_not_mutate() {
        let mut history = History::new();
        for arm in 0..4 {
            history.record(Observation {
                arm,
                reward: arm as f64,
            });
        }

        assert_eq!(history.prefix(2).len(), 2);
        assert_eq!(history.prefix(100).len(), 4);
        assert_eq!(history.len(), 4);
    }
}
