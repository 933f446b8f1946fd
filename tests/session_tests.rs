use async_trait::async_trait;
use naver_e2e::core::error::SuiteResult;
use naver_e2e::core::models::ScenarioStatus;
use naver_e2e::infrastructure::artifacts::ArtifactStore;
use naver_e2e::infrastructure::browser::mock_adapter::MockBrowserSession;
use naver_e2e::infrastructure::browser::BrowserSession;
use naver_e2e::infrastructure::session::{SessionFactory, SessionManager};
use naver_e2e::scenarios::home::HomeAccess;
use std::sync::{Arc, Mutex};

/// Hands out a clone of one prepared mock session.
struct FixedFactory(MockBrowserSession);

#[async_trait]
impl SessionFactory for FixedFactory {
    async fn open(&self) -> SuiteResult<Box<dyn BrowserSession>> {
        Ok(Box::new(self.0.clone()))
    }
}

/// Creates a brand new session per open and remembers each one.
#[derive(Clone, Default)]
struct FreshFactory {
    opened: Arc<Mutex<Vec<MockBrowserSession>>>,
}

#[async_trait]
impl SessionFactory for FreshFactory {
    async fn open(&self) -> SuiteResult<Box<dyn BrowserSession>> {
        let mock = MockBrowserSession::new();
        self.opened.lock().unwrap().push(mock.clone());
        Ok(Box::new(mock))
    }
}

#[tokio::test]
async fn passing_scenario_still_attaches_teardown_screenshot() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockBrowserSession::new();
    let manager = SessionManager::new(
        Box::new(FixedFactory(mock.clone())),
        ArtifactStore::new(dir.path()),
    );

    let outcome = manager.run(&HomeAccess).await;

    assert_eq!(outcome.status, ScenarioStatus::Passed);
    assert!(mock.is_closed(), "session must be closed after the run");
    assert_eq!(mock.screenshot_count(), 1);
    assert_eq!(outcome.artifacts.len(), 1);
    assert!(outcome.artifacts[0]
        .to_string_lossy()
        .contains("final-state-home_access"));
}

#[tokio::test]
async fn failing_scenario_closes_session_and_keeps_evidence() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockBrowserSession::new();
    // The homepage bounces to a different URL, so reachability fails.
    mock.redirect_to("https://m.naver.com/");
    let manager = SessionManager::new(
        Box::new(FixedFactory(mock.clone())),
        ArtifactStore::new(dir.path()),
    );

    let outcome = manager.run(&HomeAccess).await;

    assert_eq!(outcome.status, ScenarioStatus::Failed);
    let message = outcome.message.expect("failed outcome carries a message");
    assert!(message.contains("https://www.naver.com/"), "{}", message);
    assert!(message.contains("https://m.naver.com/"), "{}", message);

    // Teardown still ran: screenshot attached, browser released.
    assert!(mock.is_closed());
    assert_eq!(mock.screenshot_count(), 1);
    assert_eq!(outcome.artifacts.len(), 1);
}

#[tokio::test]
async fn scenarios_get_isolated_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let factory = FreshFactory::default();
    let manager = SessionManager::new(Box::new(factory.clone()), ArtifactStore::new(dir.path()));

    let first = manager.run(&HomeAccess).await;
    let second = manager.run(&HomeAccess).await;

    // Same outcome class on both runs, no shared state between them.
    assert_eq!(first.status, ScenarioStatus::Passed);
    assert_eq!(second.status, ScenarioStatus::Passed);

    let opened = factory.opened.lock().unwrap();
    assert_eq!(opened.len(), 2, "each run must open its own session");
    assert!(opened.iter().all(|s| s.is_closed()));
}

#[tokio::test]
async fn report_lists_every_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockBrowserSession::new();
    let manager = SessionManager::new(
        Box::new(FixedFactory(mock.clone())),
        ArtifactStore::new(dir.path()),
    );

    let outcomes = vec![manager.run(&HomeAccess).await, manager.run(&HomeAccess).await];
    let path = manager.artifacts().write_report(&outcomes).await.unwrap();

    let raw = std::fs::read_to_string(path).unwrap();
    let parsed: Vec<naver_e2e::core::models::ScenarioOutcome> =
        serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 2);
    assert!(parsed.iter().all(|o| o.scenario == "home_access"));
}
