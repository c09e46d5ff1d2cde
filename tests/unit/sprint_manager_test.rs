//! Unit tests for the SprintManager public API.

use qanalyzer::managers::history_registry::{HistoryRegistry, HistoryRegistryTrait};
use qanalyzer::managers::sprint_manager::{SprintManager, SprintManagerTrait};
use qanalyzer::services::notifications::LogSink;
use qanalyzer::types::errors::{RestoreError, SprintError};
use qanalyzer::types::history::{ItemSnapshot, ItemType};

fn setup() -> (SprintManager, HistoryRegistry) {
    (SprintManager::new(), HistoryRegistry::new(Box::new(LogSink)))
}

#[test]
fn test_create_and_list() {
    let (mut mgr, _) = setup();

    let id = mgr
        .create_sprint("Sprint Alpha", "Ship login", "2026-08-01", "2026-08-14")
        .unwrap();

    assert_eq!(mgr.sprint_count(), 1);
    assert_eq!(mgr.get_sprint(&id).unwrap().name, "Sprint Alpha");
}

#[test]
fn test_create_rejects_inverted_date_range() {
    let (mut mgr, _) = setup();

    let result = mgr.create_sprint("Sprint Alpha", "", "2026-08-14", "2026-08-01");

    assert!(matches!(result, Err(SprintError::InvalidDateRange(_))));
    assert_eq!(mgr.sprint_count(), 0);
}

/// A deleted sprint's history title comes from its `name`, the second step
/// of the display-title fallback chain.
#[test]
fn test_delete_uses_name_as_history_title() {
    let (mut mgr, mut reg) = setup();
    let id = mgr
        .create_sprint("Sprint Alpha", "", "2026-08-01", "2026-08-14")
        .unwrap();

    mgr.delete_sprint(&id, &mut reg).unwrap();

    assert_eq!(mgr.sprint_count(), 0);
    let entry = reg.find_entry(&id, ItemType::Sprint).unwrap();
    assert_eq!(entry.title, "Sprint Alpha");
}

#[test]
fn test_delete_unknown_id_fails() {
    let (mut mgr, mut reg) = setup();

    let result = mgr.delete_sprint("nope", &mut reg);

    assert!(matches!(result, Err(SprintError::NotFound(_))));
}

#[test]
fn test_reinsert_wrong_variant_fails() {
    use qanalyzer::services::history_view::RestoreTarget;
    use qanalyzer::types::test_case::{Priority, TestCase, TestCaseStatus};

    let (mut mgr, _) = setup();
    let snapshot = ItemSnapshot::TestCase(TestCase {
        id: "TC-1".to_string(),
        title: "Login flow".to_string(),
        description: String::new(),
        steps: vec![],
        expected_result: String::new(),
        status: TestCaseStatus::Draft,
        priority: Priority::Low,
        created_at: 0,
    });

    let result = mgr.reinsert(snapshot);

    assert!(matches!(
        result,
        Err(RestoreError::WrongItemType {
            expected: ItemType::Sprint,
            actual: ItemType::TestCase,
        })
    ));
}
