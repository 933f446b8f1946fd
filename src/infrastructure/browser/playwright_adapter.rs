use super::{BrowserError, BrowserSession};
use async_trait::async_trait;
use playwright::api::{Browser, BrowserContext, Page};
use playwright::Playwright;
use std::sync::Mutex;
use tracing::{debug, info};

/// Playwright-backed session. Launches its own Chromium so every scenario
/// gets a fresh profile. Window handles are the context's pages in creation
/// order (`win-0`, `win-1`, ...); pages are append-only for the lifetime of a
/// scenario, so the index-based handles stay stable.
pub struct PlaywrightSession {
    _playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    /// Index of the active window within the context's page list.
    active: Mutex<usize>,
}

impl PlaywrightSession {
    pub async fn launch(headless: bool) -> Result<Self, BrowserError> {
        info!("Initializing Playwright...");
        let playwright = Playwright::initialize().await.map_err(|e| {
            BrowserError::LaunchFailed(format!("Failed to initialize Playwright: {}", e))
        })?;

        let mut chromium = playwright.chromium();

        info!("Launching Chromium (headless: {})...", headless);
        let browser = chromium
            .launcher()
            .headless(headless)
            .launch()
            .await
            .map_err(|e| BrowserError::LaunchFailed(format!("Failed to launch Chromium: {}", e)))?;

        let context = browser
            .context_builder()
            .build()
            .await
            .map_err(|e| BrowserError::LaunchFailed(format!("Failed to create context: {}", e)))?;

        context
            .new_page()
            .await
            .map_err(|e| BrowserError::LaunchFailed(format!("Failed to create page: {}", e)))?;

        Ok(Self {
            _playwright: playwright,
            browser,
            context,
            active: Mutex::new(0),
        })
    }

    fn pages(&self) -> Result<Vec<Page>, BrowserError> {
        self.context
            .pages()
            .map_err(|e| BrowserError::Other(format!("Failed to get pages: {}", e)))
    }

    fn page(&self) -> Result<Page, BrowserError> {
        let index = *self.active.lock().unwrap();
        self.pages()?
            .into_iter()
            .nth(index)
            .ok_or_else(|| BrowserError::WindowNotFound(format!("win-{}", index)))
    }
}

#[async_trait]
impl BrowserSession for PlaywrightSession {
    async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.page()?
            .goto_builder(url)
            .goto()
            .await
            .map_err(|e| BrowserError::NavigationFailed(e.to_string()))?;
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<(), BrowserError> {
        self.page()?
            .fill_builder(selector, text)
            .fill()
            .await
            .map_err(|e| {
                BrowserError::ElementNotFound(format!("Failed to fill element {}: {}", selector, e))
            })?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), BrowserError> {
        self.page()?
            .click_builder(selector)
            .click()
            .await
            .map_err(|e| {
                BrowserError::ElementNotFound(format!(
                    "Failed to click element {}: {}",
                    selector, e
                ))
            })?;
        Ok(())
    }

    async fn element_exists(&self, selector: &str) -> Result<bool, BrowserError> {
        match self.page()?.query_selector(selector).await {
            Ok(found) => Ok(found.is_some()),
            Err(e) => {
                debug!("Query selector error for '{}': {}", selector, e);
                Ok(false)
            }
        }
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, BrowserError> {
        let element = match self.page()?.query_selector(selector).await {
            Ok(Some(el)) => el,
            Ok(None) => {
                debug!("Element not found: {}", selector);
                return Ok(false);
            }
            Err(e) => {
                debug!("Query selector error for '{}': {}", selector, e);
                return Ok(false);
            }
        };

        match element.is_visible().await {
            Ok(visible) => Ok(visible),
            Err(e) => {
                debug!("Failed to check visibility for '{}': {}", selector, e);
                Ok(false)
            }
        }
    }

    async fn is_clickable(&self, selector: &str) -> Result<bool, BrowserError> {
        let element = match self.page()?.query_selector(selector).await {
            Ok(Some(el)) => el,
            Ok(None) => return Ok(false),
            Err(e) => {
                debug!("Query selector error for '{}': {}", selector, e);
                return Ok(false);
            }
        };

        let visible = element.is_visible().await.unwrap_or(false);
        if !visible {
            return Ok(false);
        }
        Ok(element.is_enabled().await.unwrap_or(false))
    }

    async fn text_content(&self, selector: &str) -> Result<String, BrowserError> {
        let element = self
            .page()?
            .query_selector(selector)
            .await
            .map_err(|e| BrowserError::ElementNotFound(format!("Query failed: {}", e)))?
            .ok_or_else(|| BrowserError::ElementNotFound(selector.to_string()))?;

        element
            .text_content()
            .await
            .map_err(|e| BrowserError::Other(format!("Failed to get text content: {}", e)))?
            .ok_or_else(|| BrowserError::Other("Element has no text content".to_string()))
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        self.page()?
            .url()
            .map_err(|e| BrowserError::Other(format!("Failed to get current URL: {}", e)))
    }

    async fn window_handles(&self) -> Result<Vec<String>, BrowserError> {
        let pages = self.pages()?;
        Ok((0..pages.len()).map(|i| format!("win-{}", i)).collect())
    }

    async fn switch_to_window(&self, handle: &str) -> Result<(), BrowserError> {
        let index: usize = handle
            .strip_prefix("win-")
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| BrowserError::WindowNotFound(handle.to_string()))?;

        if index >= self.pages()?.len() {
            return Err(BrowserError::WindowNotFound(handle.to_string()));
        }
        *self.active.lock().unwrap() = index;
        Ok(())
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>, BrowserError> {
        self.page()?
            .screenshot_builder()
            .screenshot()
            .await
            .map_err(|e| BrowserError::Screenshot(e.to_string()))
    }

    async fn close(&self) -> Result<(), BrowserError> {
        info!("Closing browser...");
        self.browser
            .close()
            .await
            .map_err(|e| BrowserError::Other(format!("Failed to close browser: {}", e)))
    }
}
