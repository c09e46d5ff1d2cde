use serde::{Deserialize, Serialize};

/// Represents a single sprint managed by the sprint planner.
///
/// Sprints carry a `name` rather than a `title`; the history display-title
/// fallback chain accounts for this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub goal: String,
    /// Start date in "YYYY-MM-DD" format.
    pub start_date: String,
    /// End date in "YYYY-MM-DD" format.
    pub end_date: String,
    pub created_at: i64,
}
