use super::constants::CONFIG;
use super::{submit_query, wait, Scenario};
use crate::core::error::{SuiteError, SuiteResult};
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::browser::{BrowserError, BrowserSession};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::info;

/// TC_004: click the first news result for a valid query, follow it into the
/// new window, and check the article landed on an allow-listed domain.
///
/// The post-submit sequence crosses into a third-party page the suite does
/// not control, so any failure inside it captures a screenshot before the
/// original error unwinds.
pub struct OpenFirstNewsResult;

#[async_trait]
impl Scenario for OpenFirstNewsResult {
    fn name(&self) -> &'static str {
        "first_news_result"
    }

    fn feature(&self) -> &'static str {
        "Naver search results"
    }

    async fn run(
        &self,
        session: &dyn BrowserSession,
        artifacts: &ArtifactStore,
    ) -> SuiteResult<()> {
        submit_query(session, &CONFIG.queries.valid).await?;

        match open_first_result(session).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // Evidence first; the failure itself propagates unchanged.
                artifacts.capture(session, "screenshot-on-failure").await;
                Err(err)
            }
        }
    }
}

async fn open_first_result(session: &dyn BrowserSession) -> SuiteResult<()> {
    let w = wait(session);
    w.until_clickable(&CONFIG.selectors.first_result).await?;

    let before: HashSet<String> = session.window_handles().await?.into_iter().collect();
    session.click(&CONFIG.selectors.first_result).await?;

    let handles = w.until_window_count(2).await?;

    // The new window is whichever handle was absent before the click; handle
    // enumeration order is not a contract, so positional "last" is only a
    // fallback.
    let new_handle = handles
        .iter()
        .find(|h| !before.contains(*h))
        .or_else(|| handles.last())
        .cloned()
        .ok_or_else(|| BrowserError::WindowNotFound("no handles after click".to_string()))?;

    session.switch_to_window(&new_handle).await?;

    let url = w
        .until_url("url left the homepage", |u| u != CONFIG.urls.home)
        .await?;
    info!("Article window landed on {}", url);

    let allowed = CONFIG
        .urls
        .allowed_destinations
        .iter()
        .any(|pattern| url.contains(pattern.as_str()));
    if !allowed {
        return Err(SuiteError::assertion(
            format!(
                "url containing one of {:?}",
                CONFIG.urls.allowed_destinations
            ),
            url,
        ));
    }
    Ok(())
}
