use serde::{Deserialize, Serialize};

/// Static description of the page under test. Selectors track the live Naver
/// homepage; when the site changes its markup these are the only lines that
/// move.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NaverConfig {
    pub timeouts: Timeouts,
    pub selectors: Selectors,
    pub urls: Urls,
    pub queries: Queries,
    pub phrases: Phrases,
}

pub static CONFIG: once_cell::sync::Lazy<NaverConfig> =
    once_cell::sync::Lazy::new(NaverConfig::default);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeouts {
    /// Explicit wait budget in seconds
    pub wait_secs: u64,
    /// Inter-poll delay in milliseconds
    pub poll_millis: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            wait_secs: 10,
            poll_millis: 50,
        }
    }
}

impl Timeouts {
    pub fn wait(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.wait_secs)
    }

    pub fn poll(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_millis)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    pub search_box: String,
    pub search_button: String,
    pub first_result: String,
    pub no_result_message: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            search_box: "#query".to_string(),
            search_button: "#search-btn".to_string(),
            first_result: ".list_news > li".to_string(),
            no_result_message: "#notfound > div.not_found02 > p".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Urls {
    pub home: String,
    /// Substring patterns a clicked-through article URL may match. The exact
    /// destination host varies (desktop, mobile and section subdomains), so
    /// matching is substring-based rather than exact.
    pub allowed_destinations: Vec<String>,
}

impl Default for Urls {
    fn default() -> Self {
        Self {
            home: "https://www.naver.com/".to_string(),
            allowed_destinations: vec![
                "news.naver.com".to_string(),
                "n.news.naver.com".to_string(),
                "sports.news.naver.com".to_string(),
                "ytn.co.kr".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Queries {
    /// A token guaranteed to match nothing
    pub invalid: String,
    /// A real word ("apple")
    pub valid: String,
}

impl Default for Queries {
    fn default() -> Self {
        Self {
            invalid: "28tu9w8g".to_string(),
            valid: "사과".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrases {
    /// Fixed fragment of Naver's "no results" message
    pub no_results: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            no_results: "검색결과가 없습니다".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors_are_css() {
        let config = NaverConfig::default();
        assert_eq!(config.selectors.search_box, "#query");
        assert_eq!(config.selectors.search_button, "#search-btn");
        assert!(config.selectors.first_result.starts_with(".list_news"));
        assert!(config.selectors.no_result_message.contains("#notfound"));
    }

    #[test]
    fn test_home_url_has_trailing_slash() {
        // Reachability asserts exact equality against this value.
        assert_eq!(NaverConfig::default().urls.home, "https://www.naver.com/");
    }

    #[test]
    fn test_allow_list_is_not_empty() {
        let config = NaverConfig::default();
        assert_eq!(config.urls.allowed_destinations.len(), 4);
        assert!(config
            .urls
            .allowed_destinations
            .iter()
            .any(|p| p == "ytn.co.kr"));
    }

    #[test]
    fn test_config_serialization() {
        let config = NaverConfig::default();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: NaverConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.queries.invalid, config.queries.invalid);
        assert_eq!(deserialized.phrases.no_results, config.phrases.no_results);
    }
}
