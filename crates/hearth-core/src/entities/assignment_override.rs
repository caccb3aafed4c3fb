use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A per-date exception to the computed assignee of a task.
///
/// At most one override exists per `(task_id, date)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentOverride {
    pub task_id: String,
    pub date: NaiveDate,
    pub assigned_to_id: String,
}
