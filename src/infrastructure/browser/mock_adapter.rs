use super::{BrowserError, BrowserSession};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Scriptable in-memory stand-in for a real browser. Tests seed elements and
/// click effects up front, then drive scenarios against it exactly as they
/// would against Chromium. Cloning shares state, so a test can keep a handle
/// while the suite owns the boxed session.
#[derive(Clone, Default)]
pub struct MockBrowserSession {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Clone)]
pub struct MockElement {
    pub visible: bool,
    pub enabled: bool,
    pub text: String,
}

impl MockElement {
    /// Present, visible and enabled
    pub fn interactive() -> Self {
        Self {
            visible: true,
            enabled: true,
            text: String::new(),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            visible: true,
            enabled: true,
            text: text.to_string(),
        }
    }

    /// In the DOM but rendered with zero dimensions
    pub fn hidden() -> Self {
        Self {
            visible: false,
            enabled: true,
            text: String::new(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            visible: true,
            enabled: false,
            text: String::new(),
        }
    }
}

/// Deferred consequence of clicking a scripted element.
#[derive(Debug, Clone)]
pub enum ClickEffect {
    /// Element appears in the active window after `delay_polls` queries
    ShowElement {
        selector: String,
        element: MockElement,
        delay_polls: u32,
    },
    /// A new window opens at the given URL
    OpenWindow { url: String },
    /// The active window navigates away
    SetUrl(String),
}

#[derive(Debug, Clone)]
struct TrackedElement {
    element: MockElement,
    /// Queries remaining before the element is observable
    remaining_polls: u32,
}

#[derive(Debug, Default)]
struct MockWindow {
    url: String,
    elements: HashMap<String, TrackedElement>,
}

#[derive(Default)]
struct MockState {
    windows: Vec<MockWindow>,
    active: usize,
    redirect: Option<String>,
    click_effects: HashMap<String, Vec<ClickEffect>>,
    poisoned: Vec<String>,
    typed: Vec<(String, String)>,
    clicked: Vec<String>,
    screenshots: u32,
    closed: bool,
}

impl MockState {
    fn active_window(&mut self) -> &mut MockWindow {
        if self.windows.is_empty() {
            self.windows.push(MockWindow::default());
        }
        let index = self.active.min(self.windows.len() - 1);
        &mut self.windows[index]
    }

    /// One observation of a selector; counts down appearance latency.
    fn observe(&mut self, selector: &str) -> Option<MockElement> {
        let tracked = self.active_window().elements.get_mut(selector)?;
        if tracked.remaining_polls > 0 {
            tracked.remaining_polls -= 1;
            return None;
        }
        Some(tracked.element.clone())
    }
}

impl MockBrowserSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an element into the active window, observable immediately.
    pub fn insert_element(&self, selector: &str, element: MockElement) {
        self.insert_element_delayed(selector, element, 0);
    }

    /// Seed an element that only becomes observable after `delay_polls`
    /// queries, simulating asynchronous rendering.
    pub fn insert_element_delayed(&self, selector: &str, element: MockElement, delay_polls: u32) {
        let mut state = self.state.lock().unwrap();
        state.active_window().elements.insert(
            selector.to_string(),
            TrackedElement {
                element,
                remaining_polls: delay_polls,
            },
        );
    }

    /// Script what happens when `selector` is clicked.
    pub fn on_click(&self, selector: &str, effect: ClickEffect) {
        let mut state = self.state.lock().unwrap();
        state
            .click_effects
            .entry(selector.to_string())
            .or_default()
            .push(effect);
    }

    /// Make every navigation land on `url` instead of the requested one.
    pub fn redirect_to(&self, url: &str) {
        self.state.lock().unwrap().redirect = Some(url.to_string());
    }

    /// Make element queries against `selector` fail with a browser error.
    pub fn poison_selector(&self, selector: &str) {
        self.state.lock().unwrap().poisoned.push(selector.to_string());
    }

    pub fn open_extra_window(&self, url: &str) {
        let mut state = self.state.lock().unwrap();
        state.windows.push(MockWindow {
            url: url.to_string(),
            elements: HashMap::new(),
        });
    }

    pub fn typed(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().typed.clone()
    }

    pub fn clicked(&self) -> Vec<String> {
        self.state.lock().unwrap().clicked.clone()
    }

    pub fn screenshot_count(&self) -> u32 {
        self.state.lock().unwrap().screenshots
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    pub fn active_window_url(&self) -> String {
        let mut state = self.state.lock().unwrap();
        state.active_window().url.clone()
    }

    fn check_poisoned(state: &MockState, selector: &str) -> Result<(), BrowserError> {
        if state.poisoned.iter().any(|s| s == selector) {
            return Err(BrowserError::Other(format!(
                "scripted failure querying {}",
                selector
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for MockBrowserSession {
    async fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        info!("[Mock] Navigating to {}", url);
        let mut state = self.state.lock().unwrap();
        let landed = state.redirect.clone().unwrap_or_else(|| url.to_string());
        state.active_window().url = landed;
        Ok(())
    }

    async fn type_text(&self, selector: &str, text: &str) -> Result<(), BrowserError> {
        info!("[Mock] Typing '{}' into {}", text, selector);
        let mut state = self.state.lock().unwrap();
        state.typed.push((selector.to_string(), text.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), BrowserError> {
        info!("[Mock] Clicking {}", selector);
        let mut state = self.state.lock().unwrap();
        if state.observe(selector).is_none() {
            return Err(BrowserError::ElementNotFound(selector.to_string()));
        }
        state.clicked.push(selector.to_string());

        let effects = state.click_effects.get(selector).cloned().unwrap_or_default();
        for effect in effects {
            match effect {
                ClickEffect::ShowElement {
                    selector,
                    element,
                    delay_polls,
                } => {
                    state.active_window().elements.insert(
                        selector,
                        TrackedElement {
                            element,
                            remaining_polls: delay_polls,
                        },
                    );
                }
                ClickEffect::OpenWindow { url } => {
                    state.windows.push(MockWindow {
                        url,
                        elements: HashMap::new(),
                    });
                }
                ClickEffect::SetUrl(url) => {
                    state.active_window().url = url;
                }
            }
        }
        Ok(())
    }

    async fn element_exists(&self, selector: &str) -> Result<bool, BrowserError> {
        let mut state = self.state.lock().unwrap();
        Self::check_poisoned(&state, selector)?;
        Ok(state.observe(selector).is_some())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, BrowserError> {
        let mut state = self.state.lock().unwrap();
        Self::check_poisoned(&state, selector)?;
        Ok(state.observe(selector).map(|e| e.visible).unwrap_or(false))
    }

    async fn is_clickable(&self, selector: &str) -> Result<bool, BrowserError> {
        let mut state = self.state.lock().unwrap();
        Self::check_poisoned(&state, selector)?;
        Ok(state
            .observe(selector)
            .map(|e| e.visible && e.enabled)
            .unwrap_or(false))
    }

    async fn text_content(&self, selector: &str) -> Result<String, BrowserError> {
        let mut state = self.state.lock().unwrap();
        state
            .observe(selector)
            .map(|e| e.text)
            .ok_or_else(|| BrowserError::ElementNotFound(selector.to_string()))
    }

    async fn current_url(&self) -> Result<String, BrowserError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.active_window().url.clone())
    }

    async fn window_handles(&self) -> Result<Vec<String>, BrowserError> {
        let mut state = self.state.lock().unwrap();
        state.active_window();
        Ok((0..state.windows.len()).map(|i| format!("win-{}", i)).collect())
    }

    async fn switch_to_window(&self, handle: &str) -> Result<(), BrowserError> {
        info!("[Mock] Switching to window {}", handle);
        let index: usize = handle
            .strip_prefix("win-")
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| BrowserError::WindowNotFound(handle.to_string()))?;

        let mut state = self.state.lock().unwrap();
        if index >= state.windows.len() {
            return Err(BrowserError::WindowNotFound(handle.to_string()));
        }
        state.active = index;
        Ok(())
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>, BrowserError> {
        let mut state = self.state.lock().unwrap();
        state.screenshots += 1;
        Ok(b"\x89PNG mock screenshot".to_vec())
    }

    async fn close(&self) -> Result<(), BrowserError> {
        info!("[Mock] Closing session");
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}
