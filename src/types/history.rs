use serde::{Deserialize, Serialize};

use crate::types::defect::DefectCase;
use crate::types::sprint::Sprint;
use crate::types::test_case::TestCase;

/// Closed enumeration of the domain item kinds the history registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    TestCase,
    DefectCase,
    Sprint,
}

impl ItemType {
    /// Human-readable label used in notifications ("Test Case", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::TestCase => "Test Case",
            ItemType::DefectCase => "Defect Case",
            ItemType::Sprint => "Sprint",
        }
    }

    /// Wire tag used by the RPC protocol ("testCase", ...).
    pub fn tag(&self) -> &'static str {
        match self {
            ItemType::TestCase => "testCase",
            ItemType::DefectCase => "defectCase",
            ItemType::Sprint => "sprint",
        }
    }

    /// Parses a wire tag back into an `ItemType`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "testCase" => Some(ItemType::TestCase),
            "defectCase" => Some(ItemType::DefectCase),
            "sprint" => Some(ItemType::Sprint),
            _ => None,
        }
    }
}

/// Typed snapshot of a deleted domain item.
///
/// One variant per domain payload, keyed by [`ItemType`]. Snapshots are value
/// copies taken at deletion time; later mutation of the live collection does
/// not affect an entry already held in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "itemType", content = "item", rename_all = "camelCase")]
pub enum ItemSnapshot {
    TestCase(TestCase),
    DefectCase(DefectCase),
    Sprint(Sprint),
}

impl ItemSnapshot {
    /// The type tag of the wrapped payload.
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemSnapshot::TestCase(_) => ItemType::TestCase,
            ItemSnapshot::DefectCase(_) => ItemType::DefectCase,
            ItemSnapshot::Sprint(_) => ItemType::Sprint,
        }
    }

    /// The identifier of the wrapped payload.
    pub fn id(&self) -> &str {
        match self {
            ItemSnapshot::TestCase(tc) => &tc.id,
            ItemSnapshot::DefectCase(dc) => &dc.id,
            ItemSnapshot::Sprint(sp) => &sp.id,
        }
    }

    /// Resolves the display title via the fallback chain:
    /// `title` → `name` → `"{label} {id}"`. Empty strings count as absent.
    pub fn display_title(&self) -> String {
        let candidate = match self {
            ItemSnapshot::TestCase(tc) => &tc.title,
            ItemSnapshot::DefectCase(dc) => &dc.title,
            ItemSnapshot::Sprint(sp) => &sp.name,
        };
        if candidate.is_empty() {
            format!("{} {}", self.item_type().label(), self.id())
        } else {
            candidate.clone()
        }
    }
}

/// One soft-deleted item retained by the history registry: the snapshot plus
/// provenance metadata (type, deletion time, denormalized display title).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Identifier of the original item. Unique only together with `item_type`.
    pub id: String,
    pub item_type: ItemType,
    /// Display title resolved at insertion time.
    pub title: String,
    /// Deletion timestamp in unix seconds, assigned by the registry.
    pub deleted_at: i64,
    pub data: ItemSnapshot,
}
