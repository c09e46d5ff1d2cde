//! Test Case Manager for QAnalyzer.
//!
//! In-memory collection of test cases. Deletion is soft: the item is handed
//! to the history registry before it leaves the live list, and `reinsert`
//! accepts the stored snapshot back on restore.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::managers::history_registry::HistoryRegistryTrait;
use crate::services::history_view::RestoreTarget;
use crate::types::errors::{RestoreError, TestCaseError};
use crate::types::history::{ItemSnapshot, ItemType};
use crate::types::test_case::{Priority, TestCase, TestCaseStatus};

/// Trait defining test case management operations.
pub trait TestCaseManagerTrait {
    fn create_test_case(
        &mut self,
        title: &str,
        description: &str,
        steps: Vec<String>,
        expected_result: &str,
        priority: Priority,
    ) -> String;
    fn get_test_case(&self, id: &str) -> Option<&TestCase>;
    fn list_test_cases(&self) -> &[TestCase];
    fn update_status(&mut self, id: &str, status: TestCaseStatus) -> Result<(), TestCaseError>;
    fn delete_test_case(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), TestCaseError>;
    fn test_case_count(&self) -> usize;
}

/// In-memory test case collection.
pub struct TestCaseManager {
    test_cases: Vec<TestCase>,
}

impl TestCaseManager {
    pub fn new() -> Self {
        Self {
            test_cases: Vec::new(),
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.test_cases.iter().position(|tc| tc.id == id)
    }
}

impl Default for TestCaseManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCaseManagerTrait for TestCaseManager {
    /// Creates a new test case in Draft status. Returns the new ID.
    fn create_test_case(
        &mut self,
        title: &str,
        description: &str,
        steps: Vec<String>,
        expected_result: &str,
        priority: Priority,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.test_cases.push(TestCase {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            steps,
            expected_result: expected_result.to_string(),
            status: TestCaseStatus::Draft,
            priority,
            created_at: Self::now(),
        });
        id
    }

    fn get_test_case(&self, id: &str) -> Option<&TestCase> {
        self.test_cases.iter().find(|tc| tc.id == id)
    }

    fn list_test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    fn update_status(&mut self, id: &str, status: TestCaseStatus) -> Result<(), TestCaseError> {
        let tc = self
            .test_cases
            .iter_mut()
            .find(|tc| tc.id == id)
            .ok_or_else(|| TestCaseError::NotFound(id.to_string()))?;
        tc.status = status;
        Ok(())
    }

    /// Soft-deletes a test case: the snapshot goes to history first, then the
    /// item leaves the live list.
    fn delete_test_case(
        &mut self,
        id: &str,
        history: &mut dyn HistoryRegistryTrait,
    ) -> Result<(), TestCaseError> {
        let idx = self
            .find_index(id)
            .ok_or_else(|| TestCaseError::NotFound(id.to_string()))?;
        history.add_to_history(ItemSnapshot::TestCase(self.test_cases[idx].clone()));
        self.test_cases.remove(idx);
        Ok(())
    }

    fn test_case_count(&self) -> usize {
        self.test_cases.len()
    }
}

impl RestoreTarget for TestCaseManager {
    /// Reinserts a restored snapshot. Rejects snapshots of another variant
    /// and IDs that are already live.
    fn reinsert(&mut self, snapshot: ItemSnapshot) -> Result<(), RestoreError> {
        match snapshot {
            ItemSnapshot::TestCase(tc) => {
                if self.find_index(&tc.id).is_some() {
                    return Err(RestoreError::DuplicateItem(tc.id));
                }
                self.test_cases.push(tc);
                Ok(())
            }
            other => Err(RestoreError::WrongItemType {
                expected: ItemType::TestCase,
                actual: other.item_type(),
            }),
        }
    }
}
