use serde::{Deserialize, Serialize};

/// Severity of a defect case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "minor" => Some(Severity::Minor),
            "major" => Some(Severity::Major),
            "critical" => Some(Severity::Critical),
            "blocker" => Some(Severity::Blocker),
            _ => None,
        }
    }
}

/// Workflow status of a defect case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefectStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    Reopened,
}

impl DefectStatus {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "open" => Some(DefectStatus::Open),
            "inProgress" => Some(DefectStatus::InProgress),
            "resolved" => Some(DefectStatus::Resolved),
            "closed" => Some(DefectStatus::Closed),
            "reopened" => Some(DefectStatus::Reopened),
            _ => None,
        }
    }
}

/// Represents a single defect case managed by the defect collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: DefectStatus,
    pub created_at: i64,
}
