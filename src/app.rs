//! App Core for QAnalyzer.
//!
//! Central struct holding the history registry, the domain collections, and
//! the history view. The registry is an explicitly constructed service with
//! application lifetime, passed by reference to whoever mutates it — there is
//! no ambient/global state.

use crate::managers::defect_manager::DefectManager;
use crate::managers::history_registry::HistoryRegistry;
use crate::managers::sprint_manager::SprintManager;
use crate::managers::test_case_manager::TestCaseManager;
use crate::services::history_view::HistoryView;
use crate::services::notifications::{LogSink, NotificationSink};
use crate::types::errors::RestoreError;
use crate::types::history::ItemType;

/// Central application struct holding all managers and services.
pub struct App {
    pub history: HistoryRegistry,
    pub test_cases: TestCaseManager,
    pub defects: DefectManager,
    pub sprints: SprintManager,
    pub history_view: HistoryView,
}

impl App {
    /// Creates a new App with the production log-backed notification sink.
    pub fn new() -> Self {
        Self::with_notifier(Box::new(LogSink))
    }

    /// Creates a new App with a custom notification sink (tests use a
    /// recording sink here).
    pub fn with_notifier(notifier: Box<dyn NotificationSink>) -> Self {
        Self {
            history: HistoryRegistry::new(notifier),
            test_cases: TestCaseManager::new(),
            defects: DefectManager::new(),
            sprints: SprintManager::new(),
            history_view: HistoryView::new(),
        }
    }

    /// Restores a history entry into the collection matching its type.
    ///
    /// Dispatches to the right domain manager so callers only need the
    /// `(id, item_type)` identity pair.
    pub fn restore_item(&mut self, id: &str, item_type: ItemType) -> Result<(), RestoreError> {
        match item_type {
            ItemType::TestCase => {
                self.history_view
                    .restore(&mut self.history, &mut self.test_cases, id, item_type)
            }
            ItemType::DefectCase => {
                self.history_view
                    .restore(&mut self.history, &mut self.defects, id, item_type)
            }
            ItemType::Sprint => {
                self.history_view
                    .restore(&mut self.history, &mut self.sprints, id, item_type)
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
