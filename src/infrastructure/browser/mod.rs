use async_trait::async_trait;
use thiserror::Error;

pub mod mock_adapter;
pub mod playwright_adapter;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Browser launch failed: {0}")]
    LaunchFailed(String),
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),
    #[error("Element not found: {0}")]
    ElementNotFound(String),
    #[error("Window not found: {0}")]
    WindowNotFound(String),
    #[error("Screenshot failed: {0}")]
    Screenshot(String),
    #[error("Browser error: {0}")]
    Other(String),
}

/// One live, isolated browser instance. The unit of test isolation: a session
/// is created per scenario and destroyed when the scenario finishes, whichever
/// way it exits. Element queries report absence as `Ok(false)` so polling
/// loops can keep going; hard browser faults surface as errors.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Load a URL into the active window; returns once the load event fired
    async fn navigate(&self, url: &str) -> Result<(), BrowserError>;

    /// Type text into the element identified by selector
    async fn type_text(&self, selector: &str, text: &str) -> Result<(), BrowserError>;

    /// Click the element identified by selector
    async fn click(&self, selector: &str) -> Result<(), BrowserError>;

    /// Whether at least one element matches the selector, visible or not
    async fn element_exists(&self, selector: &str) -> Result<bool, BrowserError>;

    /// Whether a matching element is rendered with non-zero dimensions
    async fn is_visible(&self, selector: &str) -> Result<bool, BrowserError>;

    /// Whether a matching element is visible and not disabled
    async fn is_clickable(&self, selector: &str) -> Result<bool, BrowserError>;

    /// Text content of the first matching element
    async fn text_content(&self, selector: &str) -> Result<String, BrowserError>;

    /// URL of the active window
    async fn current_url(&self) -> Result<String, BrowserError>;

    /// Handles of every open window, in creation order
    async fn window_handles(&self) -> Result<Vec<String>, BrowserError>;

    /// Make the window behind `handle` the active one
    async fn switch_to_window(&self, handle: &str) -> Result<(), BrowserError>;

    /// PNG capture of the active window
    async fn screenshot_png(&self) -> Result<Vec<u8>, BrowserError>;

    /// Release the underlying browser. Must be called exactly once.
    async fn close(&self) -> Result<(), BrowserError>;
}
