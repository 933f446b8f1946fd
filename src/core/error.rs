use crate::infrastructure::browser::BrowserError;
use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy for the suite.
///
/// `Timeout` and `Assertion` are the two outcomes scenarios produce on their
/// own; everything raised while driving the browser arrives as `Browser`.
/// Nothing here is ever recovered locally, failures propagate to the runner.
#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("timed out after {timeout:?} waiting for {condition} (last state: {last_state})")]
    Timeout {
        condition: String,
        timeout: Duration,
        last_state: String,
    },

    #[error("assertion failed: expected {expected}, actual {actual}")]
    Assertion { expected: String, actual: String },

    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("artifact I/O error: {0}")]
    Artifact(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SuiteError {
    pub fn assertion(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Assertion {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type SuiteResult<T> = Result<T, SuiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_message_carries_expected_and_actual() {
        let err = SuiteError::assertion("https://www.naver.com/", "https://m.naver.com/");
        let msg = err.to_string();
        assert!(msg.contains("https://www.naver.com/"));
        assert!(msg.contains("https://m.naver.com/"));
    }

    #[test]
    fn timeout_is_distinguishable_from_browser_errors() {
        let timeout = SuiteError::Timeout {
            condition: "element present: #query".to_string(),
            timeout: Duration::from_secs(10),
            last_state: "no element matches #query".to_string(),
        };
        let browser = SuiteError::from(BrowserError::Other("stale element".to_string()));

        assert!(timeout.is_timeout());
        assert!(!browser.is_timeout());
        assert!(timeout.to_string().contains("no element matches #query"));
    }
}
