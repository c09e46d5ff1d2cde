//! Defect Case Manager for QAnalyzer.
//!
//! In-memory defect collection with the same soft-delete contract as the
//! test case manager.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::managers::history_registry::HistoryRegistryTrait;
use crate::services::history_view::RestoreTarget;
use crate::types::defect::{DefectCase, DefectStatus, Severity};
use crate::types::errors::{DefectError, RestoreError};
use crate::types::history::{ItemSnapshot, ItemType};

/// Trait defining defect case management operations.
pub trait DefectManagerTrait {
    fn create_defect(&mut self, title: &str, description: &str, severity: Severity) -> String;
    fn get_defect(&self, id: &str) -> Option<&DefectCase>;
    fn list_defects(&self) -> &[DefectCase];
    fn update_status(&mut self, id: &str, status: DefectStatus) -> Result<(), DefectError>;
    fn delete_defect(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), DefectError>;
    fn defect_count(&self) -> usize;
}

/// In-memory defect case collection.
pub struct DefectManager {
    defects: Vec<DefectCase>,
}

impl DefectManager {
    pub fn new() -> Self {
        Self {
            defects: Vec::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.defects.iter().position(|d| d.id == id)
    }
}

impl Default for DefectManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DefectManagerTrait for DefectManager {
    /// Creates a new defect case in Open status. Returns the new ID.
    fn create_defect(&mut self, title: &str, description: &str, severity: Severity) -> String {
        let id = Uuid::new_v4().to_string();
        self.defects.push(DefectCase {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            severity,
            status: DefectStatus::Open,
            created_at: Self::now(),
        });
        id
    }

    fn get_defect(&self, id: &str) -> Option<&DefectCase> {
        self.defects.iter().find(|d| d.id == id)
    }

    fn list_defects(&self) -> &[DefectCase] {
        &self.defects
    }

    fn update_status(&mut self, id: &str, status: DefectStatus) -> Result<(), DefectError> {
        let defect = self
            .defects
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DefectError::NotFound(id.to_string()))?;
        defect.status = status;
        Ok(())
    }

    /// Soft-deletes a defect case via the history registry.
    fn delete_defect(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), DefectError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| DefectError::NotFound(id.to_string()))?;
        history.add_to_history(ItemSnapshot::DefectCase(self.defects[idx].clone()));
        self.defects.remove(idx);
        Ok(())
    }

    fn defect_count(&self) -> usize {
        self.defects.len()
    }
}

impl RestoreTarget for DefectManager {
    fn reinsert(&mut self, snapshot: ItemSnapshot) -> Result<(), RestoreError> {
        match snapshot {
            ItemSnapshot::DefectCase(dc) => {
                if self.find_index(&dc.id).is_some() {
                    return Err(RestoreError::DuplicateItem(dc.id));
                }
                self.defects.push(dc);
                Ok(())
            }
            other => Err(RestoreError::WrongItemType {
                expected: ItemType::DefectCase,
                actual: other.item_type(),
            }),
        }
    }
}
