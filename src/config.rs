use crate::environment::ArmSpec;
use crate::strategies::PolicyType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct ExperimentConfig {
    pub n_plays: usize,
    pub n_repeats: usize,
    /// Base seed; run `i` uses `seed + i` so repeated runs differ but the
    /// whole experiment stays reproducible. Unseeded when absent.
    pub seed: Option<u64>,
    pub arms: Vec<ArmSpec>,
    pub strategies: Vec<PolicyType>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        builder.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn deserializes_a_full_document() {
        let raw = r#"
            [log]
            level = "info"

            [experiment]
            n_plays = 100
            n_repeats = 3
            seed = 42
            arms = [
                { type = "Normal", mean = 1.0, std = 1.0 },
                { type = "Bernoulli", p = 0.4 },
            ]
            strategies = [
                { type = "RoundRobin" },
                { type = "EpsilonGreedy", epsilon = 0.1 },
            ]
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.log.level, "info");
        assert_eq!(config.experiment.n_plays, 100);
        assert_eq!(config.experiment.n_repeats, 3);
        assert_eq!(config.experiment.seed, Some(42));
        assert_eq!(config.experiment.arms.len(), 2);
        assert_eq!(config.experiment.strategies.len(), 2);
        assert!(config.output.path.is_none());
    }
}
