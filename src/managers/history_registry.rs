//! Action History registry for QAnalyzer.
//!
//! Implements `HistoryRegistryTrait` — the soft-delete registry domain
//! collections hand deleted items to. Entries hold a typed snapshot plus
//! provenance metadata and are kept newest-first. The registry is the
//! exclusive owner of the collection; callers mutate it through `&mut self`
//! at coordinated call sites, so no interior locking is needed.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::services::notifications::{Notification, NotificationSink};
use crate::types::history::{HistoryEntry, ItemSnapshot, ItemType};

/// Default retention window for soft-deleted items, in days.
pub const DEFAULT_RETENTION_DAYS: i64 = 30;

const SECS_PER_DAY: i64 = 86_400;

/// Trait defining action history operations.
pub trait HistoryRegistryTrait {
    fn add_to_history(&mut self, snapshot: ItemSnapshot);
    fn restore_from_history(&mut self, id: &str, item_type: ItemType) -> Option<ItemSnapshot>;
    fn is_item_in_history(&self, id: &str, item_type: ItemType) -> bool;
    fn clear_history(&mut self, item_type: Option<ItemType>);
    fn prune_expired(&mut self) -> usize;
    fn find_entry(&self, id: &str, item_type: ItemType) -> Option<&HistoryEntry>;
    fn entries(&self) -> Vec<&HistoryEntry>;
    fn entry_count(&self) -> usize;
}

/// In-memory soft-delete registry with a rolling retention window.
///
/// Retention is enforced by actual pruning on every mutation, not just by
/// display filtering, so the registry cannot grow without bound over a long
/// session.
pub struct HistoryRegistry {
    entries: VecDeque<HistoryEntry>,
    retention_secs: i64,
    notifier: Box<dyn NotificationSink>,
}

impl HistoryRegistry {
    /// Creates a registry with the default 30-day retention window.
    pub fn new(notifier: Box<dyn NotificationSink>) -> Self {
        Self::with_retention_days(DEFAULT_RETENTION_DAYS, notifier)
    }

    /// Creates a registry with a custom retention window.
    pub fn with_retention_days(days: i64, notifier: Box<dyn NotificationSink>) -> Self {
        Self {
            entries: VecDeque::new(),
            retention_secs: days * SECS_PER_DAY,
            notifier,
        }
    }

    /// Rebuilds a registry from previously exported entries, preserving their
    /// timestamps. Entries must be newest-first; expired ones are dropped on
    /// the next mutation or `prune_expired` call.
    pub fn from_entries(entries: Vec<HistoryEntry>, notifier: Box<dyn NotificationSink>) -> Self {
        Self {
            entries: entries.into(),
            retention_secs: DEFAULT_RETENTION_DAYS * SECS_PER_DAY,
            notifier,
        }
    }

    /// Returns the retention window in seconds.
    pub fn retention_secs(&self) -> i64 {
        self.retention_secs
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_position(&self, id: &str, item_type: ItemType) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id && e.item_type == item_type)
    }
}

impl HistoryRegistryTrait for HistoryRegistry {
    /// Snapshots a deleted item into history.
    ///
    /// The display title is resolved via the fallback chain and `deleted_at`
    /// is stamped here, not by the caller. A live entry with the same
    /// `(id, item_type)` pair is replaced, keeping the composite key unique
    /// and the newest-first ordering intact.
    fn add_to_history(&mut self, snapshot: ItemSnapshot) {
        self.prune_expired();

        let id = snapshot.id().to_string();
        let item_type = snapshot.item_type();
        self.entries
            .retain(|e| !(e.id == id && e.item_type == item_type));

        let title = snapshot.display_title();
        self.entries.push_front(HistoryEntry {
            id,
            item_type,
            title: title.clone(),
            deleted_at: Self::now(),
            data: snapshot,
        });

        self.notifier.notify(Notification::new(
            &format!("{} Deleted", item_type.label()),
            &format!("\"{}\" was moved to history", title),
        ));
    }

    /// Removes and returns the snapshot for `(id, item_type)` if present.
    ///
    /// A missing entry is a normal negative result, not an error: the second
    /// of two restore calls finds nothing and returns `None`.
    fn restore_from_history(&mut self, id: &str, item_type: ItemType) -> Option<ItemSnapshot> {
        let pos = self.find_position(id, item_type)?;
        let entry = self.entries.remove(pos)?;

        self.notifier.notify(Notification::new(
            &format!("{} Restored", item_type.label()),
            &format!("\"{}\" was restored from history", entry.title),
        ));
        Some(entry.data)
    }

    fn is_item_in_history(&self, id: &str, item_type: ItemType) -> bool {
        self.find_position(id, item_type).is_some()
    }

    /// Purges entries permanently. With `Some(item_type)` only that type is
    /// cleared; with `None` the whole collection is emptied. Irreversible.
    fn clear_history(&mut self, item_type: Option<ItemType>) {
        self.prune_expired();

        match item_type {
            Some(t) => {
                let before = self.entries.len();
                self.entries.retain(|e| e.item_type != t);
                let removed = before - self.entries.len();
                self.notifier.notify(Notification::new(
                    "History Cleared",
                    &format!("{} {} entries removed", removed, t.label()),
                ));
            }
            None => {
                let removed = self.entries.len();
                self.entries.clear();
                self.notifier.notify(Notification::new(
                    "History Cleared",
                    &format!("{} entries removed", removed),
                ));
            }
        }
    }

    /// Drops entries older than the retention window. Returns the number
    /// removed. Runs automatically on every mutation; no notification is
    /// emitted for housekeeping.
    fn prune_expired(&mut self) -> usize {
        let cutoff = Self::now() - self.retention_secs;
        let before = self.entries.len();
        self.entries.retain(|e| e.deleted_at >= cutoff);
        before - self.entries.len()
    }

    fn find_entry(&self, id: &str, item_type: ItemType) -> Option<&HistoryEntry> {
        self.find_position(id, item_type).map(|i| &self.entries[i])
    }

    /// Entries newest-first (most recently deleted first).
    fn entries(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().collect()
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
