//! Bounded polling over live session state.
//!
//! Every UI action here triggers an asynchronous mutation on a page the suite
//! does not control (results render, a tab opens, a navigation lands), so the
//! only robust primitive is: poll a predicate at a short fixed interval until
//! it holds or a deadline expires. Success returns immediately, with no
//! post-satisfaction delay; expiry fails with the last observed state so a
//! "never appeared" is distinguishable from any other browser fault.

use crate::core::error::{SuiteError, SuiteResult};
use crate::infrastructure::browser::{BrowserError, BrowserSession};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// One observation of a wait predicate.
pub enum PollOutcome<T> {
    Satisfied(T),
    /// Not there yet; carries a description of what was actually observed.
    Pending(String),
}

/// A bounded wait over one session. Each `until_*` call computes its own
/// deadline, so nested or sequential waits never share budgets.
pub struct Wait<'a> {
    session: &'a dyn BrowserSession,
    timeout: Duration,
    interval: Duration,
}

impl<'a> Wait<'a> {
    pub fn new(session: &'a dyn BrowserSession) -> Self {
        Self {
            session,
            timeout: DEFAULT_TIMEOUT,
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Poll until satisfied or the deadline passes. The deadline check runs
    /// after each poll, so the worst case is one interval plus one poll past
    /// the timeout, and the error always carries the last unsatisfied state.
    /// Browser faults inside a poll propagate as-is; they are not timeouts.
    pub async fn until<T, F>(&self, condition: &str, mut poll: F) -> SuiteResult<T>
    where
        F: FnMut() -> BoxFuture<'a, Result<PollOutcome<T>, BrowserError>>,
    {
        let deadline = Instant::now() + self.timeout;
        let mut last_state = String::from("not yet polled");

        loop {
            match poll().await? {
                PollOutcome::Satisfied(value) => return Ok(value),
                PollOutcome::Pending(state) => last_state = state,
            }
            if Instant::now() >= deadline {
                return Err(SuiteError::Timeout {
                    condition: condition.to_string(),
                    timeout: self.timeout,
                    last_state,
                });
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// A locator resolves to at least one element, visible or not.
    pub async fn until_present(&self, selector: &str) -> SuiteResult<()> {
        let session = self.session;
        let condition = format!("element present: {}", selector);
        let sel: Arc<str> = Arc::from(selector);
        self.until(&condition, move || {
            let sel = sel.clone();
            Box::pin(async move {
                if session.element_exists(&sel).await? {
                    Ok(PollOutcome::Satisfied(()))
                } else {
                    Ok(PollOutcome::Pending(format!("no element matches {}", sel)))
                }
            })
        })
        .await
    }

    /// A matching element has non-zero rendered dimensions.
    pub async fn until_visible(&self, selector: &str) -> SuiteResult<()> {
        let session = self.session;
        let condition = format!("element visible: {}", selector);
        let sel: Arc<str> = Arc::from(selector);
        self.until(&condition, move || {
            let sel = sel.clone();
            Box::pin(async move {
                if session.is_visible(&sel).await? {
                    Ok(PollOutcome::Satisfied(()))
                } else {
                    Ok(PollOutcome::Pending(format!("{} not visible", sel)))
                }
            })
        })
        .await
    }

    /// A matching element is visible and not disabled.
    pub async fn until_clickable(&self, selector: &str) -> SuiteResult<()> {
        let session = self.session;
        let condition = format!("element clickable: {}", selector);
        let sel: Arc<str> = Arc::from(selector);
        self.until(&condition, move || {
            let sel = sel.clone();
            Box::pin(async move {
                if session.is_clickable(&sel).await? {
                    Ok(PollOutcome::Satisfied(()))
                } else {
                    Ok(PollOutcome::Pending(format!("{} not clickable", sel)))
                }
            })
        })
        .await
    }

    /// The session's window-handle set reaches exactly `count` entries.
    /// Returns the handles observed at satisfaction.
    pub async fn until_window_count(&self, count: usize) -> SuiteResult<Vec<String>> {
        let session = self.session;
        let condition = format!("window count == {}", count);
        self.until(&condition, move || {
            Box::pin(async move {
                let handles = session.window_handles().await?;
                if handles.len() == count {
                    Ok(PollOutcome::Satisfied(handles))
                } else {
                    Ok(PollOutcome::Pending(format!(
                        "window count = {}",
                        handles.len()
                    )))
                }
            })
        })
        .await
    }

    /// A caller-supplied predicate over the current URL becomes true.
    /// Returns the URL that satisfied it.
    pub async fn until_url<P>(&self, condition: &str, pred: P) -> SuiteResult<String>
    where
        P: Fn(&str) -> bool + Send + Sync + 'a,
    {
        let session = self.session;
        let pred = Arc::new(pred);
        self.until(condition, move || {
            let pred = pred.clone();
            Box::pin(async move {
                let url = session.current_url().await?;
                if pred(&url) {
                    Ok(PollOutcome::Satisfied(url))
                } else {
                    Ok(PollOutcome::Pending(format!("url = {}", url)))
                }
            })
        })
        .await
    }
}
