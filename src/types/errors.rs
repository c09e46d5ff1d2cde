use std::fmt;

use crate::types::history::ItemType;

// === HistoryError ===

/// Errors related to action history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// No history entry exists for the given `(id, item_type)` pair.
    NotFound(String, ItemType),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotFound(id, item_type) => {
                write!(f, "History entry not found: {} ({})", id, item_type.tag())
            }
        }
    }
}

impl std::error::Error for HistoryError {}

// === RestoreError ===

/// Errors related to restoring a history entry into its domain collection.
#[derive(Debug)]
pub enum RestoreError {
    /// No history entry exists for the given `(id, item_type)` pair.
    NotFound(String, ItemType),
    /// The snapshot variant does not match the target collection's type.
    WrongItemType { expected: ItemType, actual: ItemType },
    /// An item with the snapshot's ID is already live in the collection.
    DuplicateItem(String),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestoreError::NotFound(id, item_type) => {
                write!(f, "Nothing to restore: {} ({})", id, item_type.tag())
            }
            RestoreError::WrongItemType { expected, actual } => {
                write!(
                    f,
                    "Wrong snapshot type: expected {}, got {}",
                    expected.tag(),
                    actual.tag()
                )
            }
            RestoreError::DuplicateItem(id) => {
                write!(f, "Item already exists in collection: {}", id)
            }
        }
    }
}

impl std::error::Error for RestoreError {}

// === TestCaseError ===

/// Errors related to test case management operations.
#[derive(Debug)]
pub enum TestCaseError {
    /// Test case with the given ID was not found.
    NotFound(String),
    /// A test case with the given ID already exists.
    AlreadyExists(String),
    /// The provided field value is invalid.
    InvalidField(String),
}

impl fmt::Display for TestCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestCaseError::NotFound(id) => write!(f, "Test case not found: {}", id),
            TestCaseError::AlreadyExists(id) => write!(f, "Test case already exists: {}", id),
            TestCaseError::InvalidField(msg) => write!(f, "Invalid test case field: {}", msg),
        }
    }
}

impl std::error::Error for TestCaseError {}

// === DefectError ===

/// Errors related to defect case management operations.
#[derive(Debug)]
pub enum DefectError {
    /// Defect case with the given ID was not found.
    NotFound(String),
    /// A defect case with the given ID already exists.
    AlreadyExists(String),
    /// The provided field value is invalid.
    InvalidField(String),
}

impl fmt::Display for DefectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectError::NotFound(id) => write!(f, "Defect case not found: {}", id),
            DefectError::AlreadyExists(id) => write!(f, "Defect case already exists: {}", id),
            DefectError::InvalidField(msg) => write!(f, "Invalid defect case field: {}", msg),
        }
    }
}

impl std::error::Error for DefectError {}

// === SprintError ===

/// Errors related to sprint planner operations.
#[derive(Debug)]
pub enum SprintError {
    /// Sprint with the given ID was not found.
    NotFound(String),
    /// A sprint with the given ID already exists.
    AlreadyExists(String),
    /// The provided date range is invalid.
    InvalidDateRange(String),
}

impl fmt::Display for SprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SprintError::NotFound(id) => write!(f, "Sprint not found: {}", id),
            SprintError::AlreadyExists(id) => write!(f, "Sprint already exists: {}", id),
            SprintError::InvalidDateRange(msg) => write!(f, "Invalid sprint date range: {}", msg),
        }
    }
}

impl std::error::Error for SprintError {}
