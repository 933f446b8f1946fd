use super::constants::CONFIG;
use super::{submit_query, wait, Scenario};
use crate::core::error::{SuiteError, SuiteResult};
use crate::infrastructure::artifacts::ArtifactStore;
use crate::infrastructure::browser::BrowserSession;
use async_trait::async_trait;
use tracing::info;

/// TC_002: searching a nonsense token must surface the "no results" message,
/// and that message must quote the token back.
pub struct SearchInvalidWord;

#[async_trait]
impl Scenario for SearchInvalidWord {
    fn name(&self) -> &'static str {
        "search_invalid_word"
    }

    fn feature(&self) -> &'static str {
        "Naver search (invalid query)"
    }

    async fn run(
        &self,
        session: &dyn BrowserSession,
        _artifacts: &ArtifactStore,
    ) -> SuiteResult<()> {
        submit_query(session, &CONFIG.queries.invalid).await?;

        wait(session)
            .until_present(&CONFIG.selectors.no_result_message)
            .await?;
        let raw = session
            .text_content(&CONFIG.selectors.no_result_message)
            .await?;
        let text = raw.trim();
        info!("No-result message: '{}'", text);

        // Both the echoed token and the fixed phrase are required.
        if !(text.contains(&CONFIG.queries.invalid) && text.contains(&CONFIG.phrases.no_results)) {
            return Err(SuiteError::assertion(
                format!(
                    "message containing '{}' and '{}'",
                    CONFIG.queries.invalid, CONFIG.phrases.no_results
                ),
                format!("'{}'", text),
            ));
        }
        Ok(())
    }
}

/// TC_003: searching a real word must render at least one visible result item.
pub struct SearchValidWord;

#[async_trait]
impl Scenario for SearchValidWord {
    fn name(&self) -> &'static str {
        "search_valid_word"
    }

    fn feature(&self) -> &'static str {
        "Naver search (valid query)"
    }

    async fn run(
        &self,
        session: &dyn BrowserSession,
        _artifacts: &ArtifactStore,
    ) -> SuiteResult<()> {
        submit_query(session, &CONFIG.queries.valid).await?;

        wait(session)
            .until_visible(&CONFIG.selectors.first_result)
            .await?;

        let visible = session.is_visible(&CONFIG.selectors.first_result).await?;
        if !visible {
            return Err(SuiteError::assertion(
                format!("visible element at {}", CONFIG.selectors.first_result),
                "element no longer visible",
            ));
        }
        Ok(())
    }
}
