mod belief;
mod config;
mod environment;
mod errors;
mod evaluation;
mod history;
mod metrics;
mod rng;
mod strategies;

use config::AppConfig;
use evaluation::{collect_statistics, run_experiments, summarize, write_statistics};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log.level))
        .init();

    info!(
        n_plays = config.experiment.n_plays,
        n_repeats = config.experiment.n_repeats,
        strategies = config.experiment.strategies.len(),
        arms = config.experiment.arms.len(),
        "Running experiments"
    );

    let records = run_experiments(&config.experiment)?;
    let statistics = collect_statistics(&records);

    println!(
        "{:<32} {:>6} {:>12} {:>12} {:>10}",
        "strategy", "runs", "regret", "regret_avg", "best_arm"
    );
    for row in summarize(&records) {
        println!(
            "{:<32} {:>6} {:>12.4} {:>12.4} {:>10.4}",
            row.name, row.runs, row.regret, row.regret_avg, row.frac_best_arm
        );
    }

    if let Some(path) = &config.output.path {
        write_statistics(path, &statistics)?;
        info!(path = %path.display(), rows = statistics.len(), "Wrote statistics");
    }

    Ok(())
}
