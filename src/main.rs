mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use naver_e2e::core::config::SuiteConfig;
use naver_e2e::core::models::ScenarioStatus;
use naver_e2e::infrastructure::artifacts::ArtifactStore;
use naver_e2e::infrastructure::logging;
use naver_e2e::infrastructure::session::{PlaywrightFactory, SessionManager};
use naver_e2e::scenarios;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("naver-e2e")?;

    let cli = Cli::parse();
    let mut config = SuiteConfig::from_env()?;
    if cli.headed {
        config.headless = false;
    }
    if let Some(dir) = &cli.artifact_dir {
        config.artifact_dir = dir.into();
    }

    info!("Starting naver-e2e suite");
    info!(
        "Headless: {}, artifacts: {}",
        config.headless,
        config.artifact_dir.display()
    );

    let store = ArtifactStore::new(config.artifact_dir.clone());
    let manager = SessionManager::new(Box::new(PlaywrightFactory::new(config.headless)), store);

    let mut outcomes = Vec::new();
    for scenario in scenarios::all() {
        if let Some(filter) = &cli.filter {
            if !scenario.name().contains(filter.as_str()) {
                info!("Skipping '{}' (filtered)", scenario.name());
                continue;
            }
        }
        outcomes.push(manager.run(scenario.as_ref()).await);
    }

    let report = manager.artifacts().write_report(&outcomes).await?;
    info!("Report written to {}", report.display());

    let failed = outcomes
        .iter()
        .filter(|o| o.status == ScenarioStatus::Failed)
        .count();
    info!(
        "{} passed, {} failed of {} scenarios",
        outcomes.len() - failed,
        failed,
        outcomes.len()
    );

    if failed > 0 {
        error!("Suite finished with failures");
        std::process::exit(1);
    }
    Ok(())
}
