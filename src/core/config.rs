use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Runtime knobs for a suite run. Everything page-specific (selectors, URLs,
/// queries) lives in `scenarios::constants`; this only covers how the suite
/// itself executes.
#[derive(Clone, Debug)]
pub struct SuiteConfig {
    /// Launch the browser without a visible window.
    pub headless: bool,
    /// Where screenshots and the JSON report are written.
    pub artifact_dir: PathBuf,
}

impl SuiteConfig {
    /// Pure constructor for testing
    pub fn new(headless: bool, artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            headless,
            artifact_dir: artifact_dir.into(),
        }
    }

    /// Load from environment variables (`.env` supported)
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let headless = match env::var("E2E_HEADLESS") {
            Ok(v) => !matches!(v.as_str(), "0" | "false" | "no"),
            Err(_) => true,
        };
        let artifact_dir = env::var("E2E_ARTIFACT_DIR").unwrap_or_else(|_| "artifacts".to_string());

        Ok(Self {
            headless,
            artifact_dir: artifact_dir.into(),
        })
    }
}
