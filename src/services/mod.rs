// QAnalyzer services
// Services sit around the managers: the history view/query surface and the
// notification sink the registry reports through.

pub mod history_view;
pub mod notifications;
