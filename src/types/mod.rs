// QAnalyzer shared type definitions
// Each submodule defines types used across the application.

pub mod defect;
pub mod errors;
pub mod history;
pub mod sprint;
pub mod test_case;
