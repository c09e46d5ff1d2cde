//! RPC method handler for the QAnalyzer JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! appropriate managers and services via the `App` struct.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::defect_manager::DefectManagerTrait;
use crate::managers::history_registry::HistoryRegistryTrait;
use crate::managers::sprint_manager::SprintManagerTrait;
use crate::managers::test_case_manager::TestCaseManagerTrait;
use crate::types::defect::{DefectStatus, Severity};
use crate::types::history::ItemType;
use crate::types::test_case::{Priority, TestCaseStatus};

use serde_json::{json, Value};

/// Parses the "type" param into an `ItemType`.
fn item_type_param(params: &Value) -> Result<ItemType, String> {
    let tag = params
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("missing type")?;
    ItemType::from_tag(tag).ok_or_else(|| format!("unknown item type: {}", tag))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Test cases ───
        "testcase.create" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let description = params
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let expected = params
                .get("expected_result")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let steps: Vec<String> = params
                .get("steps")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|s| s.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            let priority = params
                .get("priority")
                .and_then(|v| v.as_str())
                .map(|p| Priority::from_tag(p).ok_or_else(|| format!("unknown priority: {}", p)))
                .transpose()?
                .unwrap_or(Priority::Medium);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a
                .test_cases
                .create_test_case(title, description, steps, expected, priority);
            Ok(json!({"id": id, "title": title}))
        }
        "testcase.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.test_cases.list_test_cases()).map_err(|e| e.to_string())
        }
        "testcase.get" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.test_cases.get_test_case(id) {
                Some(tc) => serde_json::to_value(tc).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }
        "testcase.update_status" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let status = params
                .get("status")
                .and_then(|v| v.as_str())
                .ok_or("missing status")?;
            let status =
                TestCaseStatus::from_tag(status).ok_or_else(|| format!("unknown status: {}", status))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.test_cases
                .update_status(id, status)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "testcase.delete" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            a.test_cases
                .delete_test_case(id, &mut a.history)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Defect cases ───
        "defect.create" => {
            let title = params
                .get("title")
                .and_then(|v| v.as_str())
                .ok_or("missing title")?;
            let description = params
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let severity = params
                .get("severity")
                .and_then(|v| v.as_str())
                .map(|s| Severity::from_tag(s).ok_or_else(|| format!("unknown severity: {}", s)))
                .transpose()?
                .unwrap_or(Severity::Major);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.defects.create_defect(title, description, severity);
            Ok(json!({"id": id, "title": title}))
        }
        "defect.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.defects.list_defects()).map_err(|e| e.to_string())
        }
        "defect.update_status" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let status = params
                .get("status")
                .and_then(|v| v.as_str())
                .ok_or("missing status")?;
            let status =
                DefectStatus::from_tag(status).ok_or_else(|| format!("unknown status: {}", status))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.defects
                .update_status(id, status)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "defect.delete" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            a.defects
                .delete_defect(id, &mut a.history)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Sprints ───
        "sprint.create" => {
            let name = params
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or("missing name")?;
            let goal = params.get("goal").and_then(|v| v.as_str()).unwrap_or("");
            let start = params
                .get("start_date")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let end = params
                .get("end_date")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a
                .sprints
                .create_sprint(name, goal, start, end)
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "name": name}))
        }
        "sprint.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.sprints.list_sprints()).map_err(|e| e.to_string())
        }
        "sprint.delete" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *a;
            a.sprints
                .delete_sprint(id, &mut a.history)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Action history ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let buckets = a.history_view.buckets(&a.history);
            Ok(json!({
                "all": serde_json::to_value(&buckets.all).map_err(|e| e.to_string())?,
                "testCases": serde_json::to_value(&buckets.test_cases).map_err(|e| e.to_string())?,
                "defectCases": serde_json::to_value(&buckets.defect_cases).map_err(|e| e.to_string())?,
                "sprints": serde_json::to_value(&buckets.sprints).map_err(|e| e.to_string())?,
            }))
        }
        "history.contains" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let item_type = item_type_param(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"in_history": a.history.is_item_in_history(id, item_type)}))
        }
        "history.restore" => {
            let id = params
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or("missing id")?;
            let item_type = item_type_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.restore_item(id, item_type).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.clear" => {
            let item_type = match params.get("type").and_then(|v| v.as_str()) {
                Some(tag) => {
                    Some(ItemType::from_tag(tag).ok_or_else(|| format!("unknown item type: {}", tag))?)
                }
                None => None,
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.history.clear_history(item_type);
            Ok(json!({"ok": true}))
        }
        "history.prune" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.history.prune_expired();
            Ok(json!({"removed": removed}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
