//! Reporting client for ReportPortal-compatible test-management services
//!
//! This crate translates test-framework lifecycle events (launch started,
//! test item created, item finished, log emitted) into REST calls against a
//! reporting service, mapping the framework's outcome vocabulary onto the
//! service's status vocabulary.
//!
//! # Examples
//!
//! ## Reporting a run
//!
//! ```no_run
//! use rp_client::{ItemType, LaunchMode, LogLevel, RpClient, RpConfig, TestOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RpConfig::new("https://rp.example.com/api/v1/demo", "api-token");
//!     let client = RpClient::new(config)?;
//!
//!     // One launch per test run
//!     let launch = client
//!         .start_launch("Nightly Run", "All suites", LaunchMode::Default)
//!         .await?;
//!
//!     // Items form a tree under the launch
//!     let test = client
//!         .start_item_in(&launch, "Login Test", "Checks login", ItemType::Test, None)
//!         .await?;
//!
//!     client
//!         .add_log(&test, LogLevel::Info, "login page loaded", None)
//!         .await?;
//!
//!     client.finish_item(&test, TestOutcome::Passed).await?;
//!     client
//!         .finish_launch(&launch, "All suites", Some(TestOutcome::Passed))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Environment-based construction
//!
//! ```no_run
//! use rp_client::RpClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads RP_BASE_URL, RP_API_TOKEN and optionally RP_LAUNCH_ID
//! let client = RpClient::from_env()?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod status;
pub mod types;

// Re-export main types
pub use api::RpClient;
pub use clock::{Clock, SystemClock};
pub use config::RpConfig;
pub use error::{Result, RpError};
pub use status::{ReportStatus, TestOutcome};
pub use types::{Attachment, ItemType, LaunchMode, LogLevel};
