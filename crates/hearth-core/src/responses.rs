//! Engine results returned to callers and printed as JSON by `hearth`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CompletionRecord, NewCompletion};
use crate::enums::Recurrence;

/// Everything a dashboard needs to render one task on one day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub task_id: String,
    pub title: String,
    pub recurrence: Recurrence,
    /// Not yet done in the current period (or, for one-time tasks, not done).
    pub due: bool,
    /// Whether the task appears on this date at all.
    pub scheduled: bool,
    pub assignee_id: Option<String>,
    pub completions_this_period: Vec<CompletionRecord>,
    pub streak: u32,
}

/// What the "complete task" mutation should write.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CompletionPlan {
    /// Flip `completed` on a one-time task.
    MarkCompleted { task_id: String },
    /// One-time task is already completed; nothing to write.
    AlreadyCompleted { task_id: String },
    /// Insert a completion record for a recurring task.
    AppendRecord {
        record: NewCompletion,
        already_done_this_period: bool,
    },
}

/// What the "uncomplete task" mutation should write.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UncompletionPlan {
    /// Flip `completed` back on a one-time task.
    MarkIncomplete { task_id: String },
    /// Delete the most recent completion record of a recurring task.
    RemoveRecord { record: CompletionRecord },
    /// Nothing to undo.
    Nothing { task_id: String },
}
