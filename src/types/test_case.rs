use serde::{Deserialize, Serialize};

/// Execution status of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestCaseStatus {
    Draft,
    Active,
    Passed,
    Failed,
    Blocked,
}

impl TestCaseStatus {
    /// Parses a wire tag ("draft", "active", "passed", "failed", "blocked").
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(TestCaseStatus::Draft),
            "active" => Some(TestCaseStatus::Active),
            "passed" => Some(TestCaseStatus::Passed),
            "failed" => Some(TestCaseStatus::Failed),
            "blocked" => Some(TestCaseStatus::Blocked),
            _ => None,
        }
    }
}

/// Priority assigned to a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

/// Represents a single test case managed by the test case collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub expected_result: String,
    pub status: TestCaseStatus,
    pub priority: Priority,
    pub created_at: i64,
}
