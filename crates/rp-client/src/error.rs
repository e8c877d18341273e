use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("no launch id configured; set one on RpConfig or use start_item_in")]
    MissingLaunchId,
}

pub type Result<T> = std::result::Result<T, RpError>;
