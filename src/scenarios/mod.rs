use crate::core::error::SuiteResult;
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::browser::BrowserSession;
use crate::sync::Wait;
use async_trait::async_trait;

pub mod constants;
pub mod home;
pub mod news;
pub mod search;

use constants::CONFIG;

/// One test case. The session arrives with the homepage already loaded; the
/// scenario drives interactions and checks post-conditions, failing with a
/// timeout, assertion or browser error that propagates to the runner.
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;
    fn feature(&self) -> &'static str;
    async fn run(
        &self,
        session: &dyn BrowserSession,
        artifacts: &ArtifactStore,
    ) -> SuiteResult<()>;
}

/// Every scenario in suite order.
pub fn all() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(home::HomeAccess),
        Box::new(search::SearchInvalidWord),
        Box::new(search::SearchValidWord),
        Box::new(news::OpenFirstNewsResult),
    ]
}

/// A `Wait` configured with the suite-wide budget and poll interval.
pub(crate) fn wait(session: &dyn BrowserSession) -> Wait<'_> {
    Wait::new(session)
        .with_timeout(CONFIG.timeouts.wait())
        .with_interval(CONFIG.timeouts.poll())
}

/// Submit a query through the homepage search form: wait for the box, click
/// into it, type, and hit the search button.
pub(crate) async fn submit_query(session: &dyn BrowserSession, query: &str) -> SuiteResult<()> {
    wait(session).until_present(&CONFIG.selectors.search_box).await?;
    session.click(&CONFIG.selectors.search_box).await?;
    session.type_text(&CONFIG.selectors.search_box, query).await?;
    session.click(&CONFIG.selectors.search_button).await?;
    Ok(())
}
