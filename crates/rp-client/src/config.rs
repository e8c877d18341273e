use crate::error::{Result, RpError};
use std::env;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RpConfig {
    /// Base address of the reporting service, e.g. the project API root.
    pub base_url: String,
    pub api_token: String,
    /// Launch to report items under. Optional; callers may instead pass a
    /// launch id per call via `start_item_in`.
    pub launch_id: Option<String>,
    pub request_timeout_seconds: u64,
}

impl RpConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            launch_id: None,
            request_timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Fix the launch all items are reported under.
    pub fn with_launch_id(mut self, launch_id: impl Into<String>) -> Self {
        self.launch_id = Some(launch_id.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = seconds;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Try to load .env file if it exists (ignore if it doesn't)
        let _ = dotenvy::dotenv();

        let base_url = env::var("RP_BASE_URL")
            .map_err(|_| RpError::ConfigError("RP_BASE_URL not set".to_string()))?;

        let api_token = env::var("RP_API_TOKEN")
            .map_err(|_| RpError::ConfigError("RP_API_TOKEN not set".to_string()))?;

        let launch_id = env::var("RP_LAUNCH_ID").ok();

        let request_timeout_seconds = env::var("RP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            launch_id,
            request_timeout_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = RpConfig::new("https://rp.example.com/api/v1/", "token");
        assert_eq!(config.base_url, "https://rp.example.com/api/v1");
    }

    #[test]
    fn launch_id_defaults_to_none() {
        let config = RpConfig::new("https://rp.example.com", "token");
        assert!(config.launch_id.is_none());

        let config = config.with_launch_id("launch-1");
        assert_eq!(config.launch_id.as_deref(), Some("launch-1"));
    }
}
