//! Unit tests for the HistoryRegistry public API.
//!
//! These tests exercise soft-delete insertion, ordering, the duplicate-add
//! replace policy, restore idempotence, scoped clearing, retention pruning,
//! and the notification contract through the `HistoryRegistryTrait` interface.

use qanalyzer::managers::history_registry::{HistoryRegistry, HistoryRegistryTrait};
use qanalyzer::services::notifications::{LogSink, Notification, RecordingSink};
use qanalyzer::types::defect::{DefectCase, DefectStatus, Severity};
use qanalyzer::types::history::{HistoryEntry, ItemSnapshot, ItemType};
use qanalyzer::types::sprint::Sprint;
use qanalyzer::types::test_case::{Priority, TestCase, TestCaseStatus};

use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: i64 = 86_400;

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Helper: registry with a recording sink plus the shared notification buffer.
fn setup() -> (HistoryRegistry, Arc<Mutex<Vec<Notification>>>) {
    let sink = RecordingSink::new();
    let handle = sink.handle();
    (HistoryRegistry::new(Box::new(sink)), handle)
}

fn test_case(id: &str, title: &str) -> ItemSnapshot {
    ItemSnapshot::TestCase(TestCase {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        steps: vec![],
        expected_result: String::new(),
        status: TestCaseStatus::Draft,
        priority: Priority::Medium,
        created_at: now(),
    })
}

fn defect(id: &str, title: &str) -> ItemSnapshot {
    ItemSnapshot::DefectCase(DefectCase {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        severity: Severity::Major,
        status: DefectStatus::Open,
        created_at: now(),
    })
}

fn sprint(id: &str, name: &str) -> ItemSnapshot {
    ItemSnapshot::Sprint(Sprint {
        id: id.to_string(),
        name: name.to_string(),
        goal: String::new(),
        start_date: String::new(),
        end_date: String::new(),
        created_at: now(),
    })
}

/// Entries are retained newest-first: adding E1, E2, E3 yields [E3, E2, E1].
#[test]
fn test_entries_are_newest_first() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "First"));
    reg.add_to_history(test_case("TC-2", "Second"));
    reg.add_to_history(defect("DC-1", "Third"));

    let entries = reg.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, "DC-1");
    assert_eq!(entries[1].id, "TC-2");
    assert_eq!(entries[2].id, "TC-1");
}

/// Re-adding a live `(id, item_type)` pair replaces the old entry, keeping
/// the composite key unique and the new entry at the front.
#[test]
fn test_duplicate_add_replaces_entry() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "Old title"));
    reg.add_to_history(test_case("TC-2", "Other"));
    reg.add_to_history(test_case("TC-1", "New title"));

    assert_eq!(reg.entry_count(), 2);
    let entries = reg.entries();
    assert_eq!(entries[0].id, "TC-1");
    assert_eq!(entries[0].title, "New title");
    assert_eq!(entries[1].id, "TC-2");
}

/// The same ID under different item types denotes different entries.
#[test]
fn test_same_id_different_types_coexist() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("X-1", "As test case"));
    reg.add_to_history(defect("X-1", "As defect"));

    assert_eq!(reg.entry_count(), 2);
    assert!(reg.is_item_in_history("X-1", ItemType::TestCase));
    assert!(reg.is_item_in_history("X-1", ItemType::DefectCase));
    assert!(!reg.is_item_in_history("X-1", ItemType::Sprint));
}

/// Restore removes exactly one entry and is idempotent: the second call
/// finds nothing and is a no-op, not an error.
#[test]
fn test_restore_removes_once_and_is_idempotent() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "Login flow"));
    reg.add_to_history(test_case("TC-2", "Logout flow"));

    let restored = reg.restore_from_history("TC-1", ItemType::TestCase);
    assert!(restored.is_some());
    assert_eq!(restored.unwrap().id(), "TC-1");
    assert_eq!(reg.entry_count(), 1);

    let again = reg.restore_from_history("TC-1", ItemType::TestCase);
    assert!(again.is_none());
    assert_eq!(reg.entry_count(), 1);
}

/// Restoring with a matching ID but wrong type must not remove anything.
#[test]
fn test_restore_requires_matching_type() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "Login flow"));

    assert!(reg.restore_from_history("TC-1", ItemType::Sprint).is_none());
    assert_eq!(reg.entry_count(), 1);
}

/// Type-scoped clear removes only that type's entries.
#[test]
fn test_clear_scoped_to_type() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "A"));
    reg.add_to_history(test_case("TC-2", "B"));
    reg.add_to_history(defect("DC-1", "C"));
    reg.add_to_history(defect("DC-2", "D"));
    reg.add_to_history(defect("DC-3", "E"));

    reg.clear_history(Some(ItemType::DefectCase));

    assert_eq!(reg.entry_count(), 2);
    assert!(reg
        .entries()
        .iter()
        .all(|e| e.item_type == ItemType::TestCase));
}

/// Clearing without a type empties the whole collection.
#[test]
fn test_clear_all() {
    let (mut reg, _) = setup();

    reg.add_to_history(test_case("TC-1", "A"));
    reg.add_to_history(sprint("S-1", "Sprint Alpha"));

    reg.clear_history(None);

    assert_eq!(reg.entry_count(), 0);
    assert!(!reg.is_item_in_history("TC-1", ItemType::TestCase));
}

/// Display-title fallback chain: title → name → "{label} {id}".
#[rstest]
#[case(test_case("TC-1", "Login flow"), "Login flow")]
#[case(sprint("S-1", "Sprint Alpha"), "Sprint Alpha")]
#[case(test_case("TC-9", ""), "Test Case TC-9")]
#[case(defect("DC-9", ""), "Defect Case DC-9")]
#[case(sprint("S-9", ""), "Sprint S-9")]
fn test_title_fallback_chain(#[case] snapshot: ItemSnapshot, #[case] expected: &str) {
    let (mut reg, _) = setup();
    let id = snapshot.id().to_string();
    let item_type = snapshot.item_type();

    reg.add_to_history(snapshot);

    let entry = reg.find_entry(&id, item_type).unwrap();
    assert_eq!(entry.title, expected);
}

/// The snapshot is a value copy: mutating the original after deletion must
/// not affect the stored entry.
#[test]
fn test_snapshot_is_value_copy() {
    let (mut reg, _) = setup();

    let mut original = TestCase {
        id: "TC-1".to_string(),
        title: "Before".to_string(),
        description: String::new(),
        steps: vec!["step one".to_string()],
        expected_result: String::new(),
        status: TestCaseStatus::Active,
        priority: Priority::High,
        created_at: now(),
    };
    reg.add_to_history(ItemSnapshot::TestCase(original.clone()));

    original.title = "After".to_string();
    original.steps.clear();

    let entry = reg.find_entry("TC-1", ItemType::TestCase).unwrap();
    match &entry.data {
        ItemSnapshot::TestCase(tc) => {
            assert_eq!(tc.title, "Before");
            assert_eq!(tc.steps.len(), 1);
        }
        other => panic!("unexpected snapshot variant: {:?}", other),
    }
}

/// Every mutating action produces a notification naming the type label and
/// the resolved title.
#[test]
fn test_notifications_emitted_on_add_restore_clear() {
    let (mut reg, notifications) = setup();

    reg.add_to_history(test_case("TC-1", "Login flow"));
    reg.restore_from_history("TC-1", ItemType::TestCase);
    reg.clear_history(None);

    let notes = notifications.lock().unwrap();
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].title, "Test Case Deleted");
    assert!(notes[0].description.contains("Login flow"));
    assert_eq!(notes[1].title, "Test Case Restored");
    assert!(notes[1].description.contains("Login flow"));
    assert_eq!(notes[2].title, "History Cleared");
}

/// A restore that finds nothing emits no notification.
#[test]
fn test_no_notification_on_missing_restore() {
    let (mut reg, notifications) = setup();

    reg.restore_from_history("nope", ItemType::Sprint);

    assert!(notifications.lock().unwrap().is_empty());
}

/// Entries older than the retention window are actually pruned, not just
/// hidden: a 31-day-old entry is removed, a 29-day-old one survives.
#[test]
fn test_prune_expired_drops_old_entries() {
    let make_entry = |id: &str, age_days: i64| HistoryEntry {
        id: id.to_string(),
        item_type: ItemType::TestCase,
        title: id.to_string(),
        deleted_at: now() - age_days * SECS_PER_DAY,
        data: test_case(id, id),
    };

    let mut reg = HistoryRegistry::from_entries(
        vec![make_entry("TC-recent", 29), make_entry("TC-stale", 31)],
        Box::new(LogSink),
    );
    assert_eq!(reg.entry_count(), 2);

    let removed = reg.prune_expired();

    assert_eq!(removed, 1);
    assert_eq!(reg.entry_count(), 1);
    assert!(reg.is_item_in_history("TC-recent", ItemType::TestCase));
    assert!(!reg.is_item_in_history("TC-stale", ItemType::TestCase));
}

/// Pruning also runs on mutation, so a stale entry disappears as a side
/// effect of the next add.
#[test]
fn test_add_prunes_expired_entries() {
    let stale = HistoryEntry {
        id: "TC-stale".to_string(),
        item_type: ItemType::TestCase,
        title: "Stale".to_string(),
        deleted_at: now() - 40 * SECS_PER_DAY,
        data: test_case("TC-stale", "Stale"),
    };
    let mut reg = HistoryRegistry::from_entries(vec![stale], Box::new(LogSink));

    reg.add_to_history(test_case("TC-new", "Fresh"));

    assert_eq!(reg.entry_count(), 1);
    assert!(reg.is_item_in_history("TC-new", ItemType::TestCase));
}
