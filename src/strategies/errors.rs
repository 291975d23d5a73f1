use crate::environment::EnvironmentError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Epsilon must be in [0, 1], got {0}")]
    InvalidEpsilon(f64),
}

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Cannot run a strategy against an environment with no arms")]
    NoArms,
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}
