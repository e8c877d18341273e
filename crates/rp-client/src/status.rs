use serde::{Deserialize, Serialize};

/// Outcome vocabulary of the calling test framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
    Ambiguous,
}

/// Status vocabulary of the reporting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Passed,
    Failed,
    Stopped,
    Skipped,
    Reseted,
    Cancelled,
}

impl TestOutcome {
    /// Translate a framework outcome into the service's vocabulary.
    ///
    /// PENDING, UNDEFINED and AMBIGUOUS have no service equivalent and are
    /// reported as failures rather than dropped.
    pub fn to_report_status(self) -> ReportStatus {
        match self {
            TestOutcome::Passed => ReportStatus::Passed,
            TestOutcome::Skipped => ReportStatus::Skipped,
            _ => ReportStatus::Failed,
        }
    }
}
