// QAnalyzer state managers
// Managers handle stateful operations: the action history registry and the
// live domain collections (test cases, defect cases, sprints).

pub mod defect_manager;
pub mod history_registry;
pub mod sprint_manager;
pub mod test_case_manager;
