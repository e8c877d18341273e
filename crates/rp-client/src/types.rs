use crate::status::ReportStatus;
use serde::{Deserialize, Serialize};

/// Launch reporting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchMode {
    Default,
    Debug,
}

/// Node type in the service's hierarchical report tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Suite,
    Story,
    Test,
    Scenario,
    Step,
    BeforeClass,
    BeforeGroups,
    BeforeMethod,
    BeforeSuite,
    BeforeTest,
    AfterClass,
    AfterGroups,
    AfterMethod,
    AfterSuite,
    AfterTest,
}

/// Log severity accepted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Fatal,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartLaunchRequest {
    pub name: String,
    pub start_time: i64,
    pub description: String,
    pub mode: LaunchMode,
    pub tags: Vec<String>,
}

/// Body for both the finish and stop launch endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishLaunchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    pub end_time: i64,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartItemRequest {
    pub description: String,
    pub launch_id: String,
    pub name: String,
    pub parameters: Vec<ItemParameter>,
    pub retry: bool,
    pub start_time: i64,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemParameter {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishItemRequest {
    pub end_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    pub tags: Vec<String>,
}

/// The JSON record carried in the `json_request_part` of a log submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveLogRequest {
    pub item_id: String,
    pub level: LogLevel,
    pub message: String,
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileRef>,
}

/// Names the attached file inside the log record; the bytes travel in the
/// separate `file` multipart part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCreatedResponse {
    pub id: String,
}

/// A named binary buffer to attach to a log entry.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Content type inferred from the file extension.
    pub fn content_type(&self) -> &'static str {
        let name = self.name.to_lowercase();
        if name.ends_with(".png") {
            "image/png"
        } else if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            "image/jpeg"
        } else if name.ends_with(".gif") {
            "image/gif"
        } else if name.ends_with(".webp") {
            "image/webp"
        } else if name.ends_with(".txt") || name.ends_with(".log") {
            "text/plain"
        } else {
            "application/octet-stream"
        }
    }
}
