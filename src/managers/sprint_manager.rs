//! Sprint Planner for QAnalyzer.
//!
//! In-memory sprint collection. Sprints are named rather than titled, which
//! exercises the second step of the history display-title fallback chain.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::managers::history_registry::HistoryRegistryTrait;
use crate::services::history_view::RestoreTarget;
use crate::types::errors::{RestoreError, SprintError};
use crate::types::history::{ItemSnapshot, ItemType};
use crate::types::sprint::Sprint;

/// Trait defining sprint planner operations.
pub trait SprintManagerTrait {
    fn create_sprint(
        &mut self,
        name: &str,
        goal: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<String, SprintError>;
    fn get_sprint(&self, id: &str) -> Option<&Sprint>;
    fn list_sprints(&self) -> &[Sprint];
    fn delete_sprint(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), SprintError>;
    fn sprint_count(&self) -> usize;
}

/// In-memory sprint collection.
pub struct SprintManager {
    sprints: Vec<Sprint>,
}

impl SprintManager {
    pub fn new() -> Self {
        Self {
            sprints: Vec::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.sprints.iter().position(|s| s.id == id)
    }
}

impl Default for SprintManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SprintManagerTrait for SprintManager {
    /// Creates a new sprint. Dates are "YYYY-MM-DD"; the end date must not
    /// sort before the start date (lexicographic order matches chronological
    /// order for this format).
    fn create_sprint(
        &mut self,
        name: &str,
        goal: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<String, SprintError> {
        if !start_date.is_empty() && !end_date.is_empty() && end_date < start_date {
            return Err(SprintError::InvalidDateRange(format!(
                "{} ends before it starts ({} > {})",
                name, start_date, end_date
            )));
        }
        let id = Uuid::new_v4().to_string();
        self.sprints.push(Sprint {
            id: id.clone(),
            name: name.to_string(),
            goal: goal.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            created_at: Self::now(),
        });
        Ok(id)
    }

    fn get_sprint(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id == id)
    }

    fn list_sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    /// Soft-deletes a sprint via the history registry.
    fn delete_sprint(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), SprintError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| SprintError::NotFound(id.to_string()))?;
        history.add_to_history(ItemSnapshot::Sprint(self.sprints[idx].clone()));
        self.sprints.remove(idx);
        Ok(())
    }

    fn sprint_count(&self) -> usize {
        self.sprints.len()
    }
}

impl RestoreTarget for SprintManager {
    fn reinsert(&mut self, snapshot: ItemSnapshot) -> Result<(), RestoreError> {
        match snapshot {
            ItemSnapshot::Sprint(sp) => {
                if self.find_index(&sp.id).is_some() {
                    return Err(RestoreError::DuplicateItem(sp.id));
                }
                self.sprints.push(sp);
                Ok(())
            }
            other => Err(RestoreError::WrongItemType {
                expected: ItemType::Sprint,
                actual: other.item_type(),
            }),
        }
    }
}
