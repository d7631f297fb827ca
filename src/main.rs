use anyhow::{Context, Result};
use panmixia::engines::reporting::run_trials;
use panmixia::{ConfigManager, Report};
use std::env;

fn main() -> Result<()> {
    // Configure logging via RUST_LOG
    env_logger::init();

    let manager = ConfigManager::new();

    // Optional config file as the first argument
    if let Some(path) = env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?;
        log::info!("Loaded configuration from {}", path);
    } else {
        manager
            .load_from_env()
            .context("loading config from environment")?;
    }

    let config = manager.get()?;
    config.validate().context("invalid configuration")?;

    let trials = run_trials(&config).context("running trials")?;
    let report = Report::new(config.simulation.generations, trials);
    report.write(&config.report).context("writing report")?;

    Ok(())
}
