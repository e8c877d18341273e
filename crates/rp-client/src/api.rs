use crate::clock::{Clock, SystemClock};
use crate::config::RpConfig;
use crate::error::{Result, RpError};
use crate::status::TestOutcome;
use crate::types::*;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Client for a ReportPortal-compatible reporting service.
///
/// One instance per test run. Every operation is a single request/response
/// round trip against the configured base address; the client holds no
/// mutable state, so it can be shared across tasks behind `&self`.
pub struct RpClient {
    client: Client,
    config: RpConfig,
    clock: Arc<dyn Clock>,
}

impl RpClient {
    /// Create a new reporting client with configuration
    pub fn new(config: RpConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a client with an explicit time source.
    pub fn with_clock(config: RpConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config,
            clock,
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = RpConfig::from_env()?;
        Self::new(config)
    }

    /// Start a launch and return its service-assigned id.
    pub async fn start_launch(
        &self,
        name: &str,
        description: &str,
        mode: LaunchMode,
    ) -> Result<String> {
        info!("Starting launch: {}", name);

        let request = StartLaunchRequest {
            name: name.to_string(),
            start_time: self.clock.now_ms(),
            description: description.to_string(),
            mode,
            tags: Vec::new(),
        };

        let response = self
            .client
            .post(self.endpoint("/launch"))
            .header("accept", "application/json")
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RpError::ApiError(format!(
                "Failed to start launch: {} - {}",
                status, body
            )));
        }

        let created: EntryCreatedResponse = response.json().await?;
        debug!("Launch started with ID: {}", created.id);

        Ok(created.id)
    }

    /// Finish a launch that ran to completion.
    pub async fn finish_launch(
        &self,
        launch_id: &str,
        description: &str,
        outcome: Option<TestOutcome>,
    ) -> Result<()> {
        info!("Finishing launch {}", launch_id);
        self.end_launch(launch_id, "finish", description, outcome)
            .await
    }

    /// Force-stop a launch that did not run to completion.
    pub async fn stop_launch(
        &self,
        launch_id: &str,
        description: &str,
        outcome: Option<TestOutcome>,
    ) -> Result<()> {
        info!("Stopping launch {}", launch_id);
        self.end_launch(launch_id, "stop", description, outcome)
            .await
    }

    async fn end_launch(
        &self,
        launch_id: &str,
        action: &str,
        description: &str,
        outcome: Option<TestOutcome>,
    ) -> Result<()> {
        let request = FinishLaunchRequest {
            status: outcome.map(TestOutcome::to_report_status),
            end_time: self.clock.now_ms(),
            description: description.to_string(),
            tags: Vec::new(),
        };

        let url = self.endpoint(&format!("/launch/{}/{}", launch_id, action));

        let response = self
            .client
            .put(&url)
            .header("accept", "application/json")
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RpError::ApiError(format!(
                "Failed to {} launch: {} - {}",
                action, status, body
            )));
        }

        Ok(())
    }

    /// Create a test item under the launch fixed at construction.
    ///
    /// Fails with [`RpError::MissingLaunchId`] when no launch id was
    /// configured; use [`RpClient::start_item_in`] to pass one per call.
    pub async fn start_item(
        &self,
        name: &str,
        description: &str,
        item_type: ItemType,
        parent_item_id: Option<&str>,
    ) -> Result<String> {
        let launch_id = self
            .config
            .launch_id
            .clone()
            .ok_or(RpError::MissingLaunchId)?;

        self.start_item_in(&launch_id, name, description, item_type, parent_item_id)
            .await
    }

    /// Create a test item under an explicit launch. With a parent item id the
    /// new item becomes that item's child in the report tree.
    pub async fn start_item_in(
        &self,
        launch_id: &str,
        name: &str,
        description: &str,
        item_type: ItemType,
        parent_item_id: Option<&str>,
    ) -> Result<String> {
        debug!("Creating {:?} item: {}", item_type, name);

        let request = StartItemRequest {
            description: description.to_string(),
            launch_id: launch_id.to_string(),
            name: name.to_string(),
            parameters: Vec::new(),
            retry: false,
            start_time: self.clock.now_ms(),
            tags: Vec::new(),
            item_type,
        };

        let url = self.endpoint(&item_path(parent_item_id));

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RpError::ApiError(format!(
                "Failed to create item: {} - {}",
                status, body
            )));
        }

        let created: EntryCreatedResponse = response.json().await?;
        debug!("Item created with ID: {}", created.id);

        Ok(created.id)
    }

    /// Finish a test item, reporting its translated status.
    pub async fn finish_item(&self, item_id: &str, outcome: TestOutcome) -> Result<()> {
        debug!("Finishing item {} as {:?}", item_id, outcome);

        let request = FinishItemRequest {
            end_time: self.clock.now_ms(),
            status: Some(outcome.to_report_status()),
            tags: Vec::new(),
        };

        let url = self.endpoint(&format!("/item/{}", item_id));

        let response = self
            .client
            .put(&url)
            .header("accept", "application/json")
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RpError::ApiError(format!(
                "Failed to finish item: {} - {}",
                status, body
            )));
        }

        Ok(())
    }

    /// Attach a log entry to a test item and return the entry's id.
    ///
    /// The record travels as a `json_request_part` multipart part; an
    /// attachment adds a second `file` part carrying the raw bytes under the
    /// attachment's name.
    pub async fn add_log(
        &self,
        item_id: &str,
        level: LogLevel,
        message: &str,
        attachment: Option<Attachment>,
    ) -> Result<String> {
        debug!("Attaching {:?} log to item {}", level, item_id);

        let record = SaveLogRequest {
            item_id: item_id.to_string(),
            level,
            message: message.to_string(),
            time: self.clock.now_ms(),
            file: attachment.as_ref().map(|a| FileRef {
                name: a.name.clone(),
            }),
        };

        let json_part =
            Part::text(serde_json::to_string(&record)?).mime_str("application/json")?;
        let mut form = Form::new().part("json_request_part", json_part);

        if let Some(attachment) = attachment {
            let content_type = attachment.content_type();
            let file_part = Part::bytes(attachment.content)
                .file_name(attachment.name)
                .mime_str(content_type)?;
            form = form.part("file", file_part);
        }

        let response = self
            .client
            .post(self.endpoint("/log"))
            .header("accept", "application/json")
            .bearer_auth(&self.config.api_token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RpError::ApiError(format!(
                "Failed to add log: {} - {}",
                status, body
            )));
        }

        let created: EntryCreatedResponse = response.json().await?;
        debug!("Log entry created with ID: {}", created.id);

        Ok(created.id)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

/// Items with a parent are posted under the parent's path segment.
fn item_path(parent_item_id: Option<&str>) -> String {
    match parent_item_id {
        Some(parent) => format!("/item/{}", parent),
        None => "/item".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_items_post_to_the_collection_path() {
        assert_eq!(item_path(None), "/item");
    }

    #[test]
    fn child_items_post_under_the_parent() {
        assert_eq!(item_path(Some("parent-7")), "/item/parent-7");
    }
}
