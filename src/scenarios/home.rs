use super::constants::CONFIG;
use super::Scenario;
use crate::core::error::{SuiteError, SuiteResult};
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::browser::BrowserSession;
use async_trait::async_trait;
use tracing::info;

/// TC_001: the homepage must load at exactly the fixed URL. Exact string
/// equality, so any redirect to a path, query string or mobile host fails.
pub struct HomeAccess;

#[async_trait]
impl Scenario for HomeAccess {
    fn name(&self) -> &'static str {
        "home_access"
    }

    fn feature(&self) -> &'static str {
        "Naver reachability"
    }

    async fn run(
        &self,
        session: &dyn BrowserSession,
        _artifacts: &ArtifactStore,
    ) -> SuiteResult<()> {
        let url = session.current_url().await?;
        info!("Loaded URL: {}", url);

        if url != CONFIG.urls.home {
            return Err(SuiteError::assertion(&CONFIG.urls.home, &url));
        }
        Ok(())
    }
}
