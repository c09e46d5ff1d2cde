//! History View for QAnalyzer.
//!
//! Read/query surface over the history registry: time-windowed visibility,
//! per-type buckets, and orchestration of restore/clear commands between the
//! registry and the owning domain collection.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::managers::history_registry::{HistoryRegistry, HistoryRegistryTrait};
use crate::types::errors::RestoreError;
use crate::types::history::{HistoryEntry, ItemSnapshot, ItemType};

const SECS_PER_DAY: i64 = 86_400;

/// Seam between the view and a domain collection: accepts a stored snapshot
/// back into the live list on restore.
pub trait RestoreTarget {
    fn reinsert(&mut self, snapshot: ItemSnapshot) -> Result<(), RestoreError>;
}

/// Time-filtered entries partitioned by item type, plus the union.
///
/// All buckets preserve the registry's newest-first order.
#[derive(Debug, Clone)]
pub struct HistoryBuckets {
    pub all: Vec<HistoryEntry>,
    pub test_cases: Vec<HistoryEntry>,
    pub defect_cases: Vec<HistoryEntry>,
    pub sprints: Vec<HistoryEntry>,
}

impl HistoryBuckets {
    pub fn bucket(&self, item_type: ItemType) -> &[HistoryEntry] {
        match item_type {
            ItemType::TestCase => &self.test_cases,
            ItemType::DefectCase => &self.defect_cases,
            ItemType::Sprint => &self.sprints,
        }
    }
}

/// Read surface over the registry with a rolling visibility window.
pub struct HistoryView {
    window_secs: i64,
}

impl HistoryView {
    /// Creates a view with the default 30-day window.
    pub fn new() -> Self {
        Self::with_window_days(30)
    }

    pub fn with_window_days(days: i64) -> Self {
        Self {
            window_secs: days * SECS_PER_DAY,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Pure window filter: keeps entries with `deleted_at >= now - window`.
    /// Split out so the cutoff arithmetic is testable with fixed timestamps.
    pub fn window_filter<'a>(
        entries: Vec<&'a HistoryEntry>,
        window_secs: i64,
        now: i64,
    ) -> Vec<&'a HistoryEntry> {
        let cutoff = now - window_secs;
        entries
            .into_iter()
            .filter(|e| e.deleted_at >= cutoff)
            .collect()
    }

    /// Entries within the visibility window, newest-first.
    pub fn visible_entries<'a>(&self, registry: &'a HistoryRegistry) -> Vec<&'a HistoryEntry> {
        Self::window_filter(registry.entries(), self.window_secs, Self::now())
    }

    /// Partitions the windowed entries into per-type buckets plus "all".
    pub fn buckets(&self, registry: &HistoryRegistry) -> HistoryBuckets {
        let visible = self.visible_entries(registry);
        let mut buckets = HistoryBuckets {
            all: Vec::with_capacity(visible.len()),
            test_cases: Vec::new(),
            defect_cases: Vec::new(),
            sprints: Vec::new(),
        };
        for entry in visible {
            match entry.item_type {
                ItemType::TestCase => buckets.test_cases.push(entry.clone()),
                ItemType::DefectCase => buckets.defect_cases.push(entry.clone()),
                ItemType::Sprint => buckets.sprints.push(entry.clone()),
            }
            buckets.all.push(entry.clone());
        }
        buckets
    }

    /// Restores an entry into its owning collection.
    ///
    /// Reinsert-first ordering: the snapshot goes back into the domain
    /// collection before the entry is removed from history, so a failed
    /// reinsert leaves history untouched and the restore can be retried.
    pub fn restore(
        &self,
        registry: &mut HistoryRegistry,
        target: &mut dyn RestoreTarget,
        id: &str,
        item_type: ItemType,
    ) -> Result<(), RestoreError> {
        let snapshot = registry
            .find_entry(id, item_type)
            .map(|e| e.data.clone())
            .ok_or_else(|| RestoreError::NotFound(id.to_string(), item_type))?;

        target.reinsert(snapshot)?;
        registry.restore_from_history(id, item_type);
        Ok(())
    }

    /// Delegates a bulk clear to the registry, optionally scoped to one type.
    pub fn clear(&self, registry: &mut HistoryRegistry, item_type: Option<ItemType>) {
        registry.clear_history(item_type);
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new()
    }
}
