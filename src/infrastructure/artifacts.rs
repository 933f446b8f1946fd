use crate::core::error::SuiteResult;
use crate::core::models::ScenarioOutcome;
use crate::infrastructure::browser::BrowserSession;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Sink for failure evidence and run reports: labelled PNG screenshots plus a
/// JSON record of every scenario outcome.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write PNG bytes under a label; the timestamp keeps names unique across
    /// repeated captures within a run.
    pub async fn attach_png(&self, label: &str, bytes: &[u8]) -> SuiteResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let name = format!("{}-{}.png", Local::now().format("%Y%m%dT%H%M%S%.3f"), label);
        let path = self.dir.join(name);
        tokio::fs::write(&path, bytes).await?;
        info!("Attached artifact {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Screenshot the session and attach it. Evidence capture is a side
    /// effect only: any error here is logged and swallowed so it can never
    /// replace the failure that triggered it.
    pub async fn capture(&self, session: &dyn BrowserSession, label: &str) -> Option<PathBuf> {
        let bytes = match session.screenshot_png().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Screenshot capture failed for '{}': {}", label, e);
                return None;
            }
        };
        match self.attach_png(label, &bytes).await {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Failed to attach screenshot '{}': {}", label, e);
                None
            }
        }
    }

    pub async fn write_report(&self, outcomes: &[ScenarioOutcome]) -> SuiteResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join("report.json");
        let json = serde_json::to_vec_pretty(outcomes)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e))?;
        tokio::fs::write(&path, json).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ScenarioOutcome;
    use std::time::Duration;

    #[tokio::test]
    async fn attach_png_writes_labelled_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let path = store.attach_png("final-state", b"png bytes").await.unwrap();

        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("final-state"));
        assert_eq!(std::fs::read(&path).unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let outcomes = vec![ScenarioOutcome::passed(
            "home_access",
            "Naver reachability",
            vec![],
            Duration::from_millis(10),
        )];

        let path = store.write_report(&outcomes).await.unwrap();

        let raw = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<ScenarioOutcome> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, outcomes);
    }
}
