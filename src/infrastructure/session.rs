use crate::core::error::SuiteResult;
use crate::core::models::ScenarioOutcome;
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::browser::playwright_adapter::PlaywrightSession;
use crate::infrastructure::browser::BrowserSession;
use crate::scenarios::constants::CONFIG;
use crate::scenarios::Scenario;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Produces fresh, isolated browser sessions.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn open(&self) -> SuiteResult<Box<dyn BrowserSession>>;
}

pub struct PlaywrightFactory {
    headless: bool,
}

impl PlaywrightFactory {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }
}

#[async_trait]
impl SessionFactory for PlaywrightFactory {
    async fn open(&self) -> SuiteResult<Box<dyn BrowserSession>> {
        let session = PlaywrightSession::launch(self.headless).await?;
        Ok(Box::new(session))
    }
}

/// Owns the session lifecycle around every scenario: open, load the homepage,
/// run the scenario body, attach an unconditional final-state screenshot, and
/// close. Exactly one close per open, on every exit path.
pub struct SessionManager {
    factory: Box<dyn SessionFactory>,
    artifacts: ArtifactStore,
}

impl SessionManager {
    pub fn new(factory: Box<dyn SessionFactory>, artifacts: ArtifactStore) -> Self {
        Self { factory, artifacts }
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    pub async fn run(&self, scenario: &dyn Scenario) -> ScenarioOutcome {
        let started = Instant::now();
        let session_id = Uuid::new_v4();
        info!(
            "Starting scenario '{}' ({}) [session {}]",
            scenario.name(),
            scenario.feature(),
            session_id
        );

        let session = match self.factory.open().await {
            Ok(session) => session,
            Err(e) => {
                error!("Failed to open session for '{}': {}", scenario.name(), e);
                return ScenarioOutcome::failed(
                    scenario.name(),
                    scenario.feature(),
                    format!("session open failed: {}", e),
                    vec![],
                    started.elapsed(),
                );
            }
        };

        let result = match session.navigate(&CONFIG.urls.home).await {
            Ok(()) => scenario.run(session.as_ref(), &self.artifacts).await,
            Err(e) => Err(e.into()),
        };

        // Final-state evidence is captured whether the scenario passed or not.
        let mut artifacts = Vec::new();
        let label = format!("final-state-{}", scenario.name());
        if let Some(path) = self.artifacts.capture(session.as_ref(), &label).await {
            artifacts.push(path);
        }

        // A leaked browser is a fatal condition to surface, not to retry.
        if let Err(e) = session.close().await {
            error!("Failed to close session for '{}': {}", scenario.name(), e);
        }

        match result {
            Ok(()) => {
                info!("Scenario '{}' passed", scenario.name());
                ScenarioOutcome::passed(
                    scenario.name(),
                    scenario.feature(),
                    artifacts,
                    started.elapsed(),
                )
            }
            Err(e) => {
                error!("Scenario '{}' failed: {}", scenario.name(), e);
                ScenarioOutcome::failed(
                    scenario.name(),
                    scenario.feature(),
                    e.to_string(),
                    artifacts,
                    started.elapsed(),
                )
            }
        }
    }
}
