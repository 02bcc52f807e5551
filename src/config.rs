//! Build-time Configuration
//!
//! Values baked in at compile time, the way the bundler injects them.

use log::LevelFilter;

/// Backend used when `COOKUS_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// REST base URL without trailing slash
    pub base_url: String,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("COOKUS_API_URL"), option_env!("COOKUS_LOG"))
    }

    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .map(console_logger::parse_level)
            .unwrap_or(LevelFilter::Info);
        Self { base_url, log_level }
    }

    /// Absolute URL for an API path such as `/auth/login`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_trailing_slash_and_blank() {
        let config = ApiConfig::from_values(Some("https://api.cookus.kr/v1/"), Some("debug"));
        assert_eq!(config.base_url, "https://api.cookus.kr/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);

        let blank = ApiConfig::from_values(Some("  "), None);
        assert_eq!(blank.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_url_for() {
        let config = ApiConfig::from_values(Some("https://api.cookus.kr/"), None);
        assert_eq!(config.url_for("/auth/login"), "https://api.cookus.kr/auth/login");
        assert_eq!(config.url_for("me"), "https://api.cookus.kr/me");
    }
}
