use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScenarioStatus {
    Passed,
    Failed,
}

/// Record of one scenario run, serialized into the run report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: String,
    pub feature: String,
    pub status: ScenarioStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub artifacts: Vec<PathBuf>,
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    pub fn passed(
        scenario: &str,
        feature: &str,
        artifacts: Vec<PathBuf>,
        duration: Duration,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            feature: feature.to_string(),
            status: ScenarioStatus::Passed,
            message: None,
            artifacts,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn failed(
        scenario: &str,
        feature: &str,
        message: String,
        artifacts: Vec<PathBuf>,
        duration: Duration,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            feature: feature.to_string(),
            status: ScenarioStatus::Failed,
            message: Some(message),
            artifacts,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == ScenarioStatus::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let outcome = ScenarioOutcome::failed(
            "first_news_result",
            "Naver search results",
            "assertion failed".to_string(),
            vec![PathBuf::from("artifacts/shot.png")],
            Duration::from_millis(1250),
        );

        let serialized = serde_json::to_string(&outcome).unwrap();
        let deserialized: ScenarioOutcome = serde_json::from_str(&serialized).unwrap();

        assert_eq!(outcome, deserialized);
        assert_eq!(deserialized.duration_ms, 1250);
        assert!(!deserialized.is_passed());
    }

    #[test]
    fn test_passed_has_no_message() {
        let outcome = ScenarioOutcome::passed(
            "home_access",
            "Naver reachability",
            vec![],
            Duration::from_millis(300),
        );
        assert!(outcome.is_passed());
        assert!(outcome.message.is_none());
    }
}
