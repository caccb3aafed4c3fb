use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Immutable receipt that a recurring task was done.
///
/// `completed_at` is household wall-clock time; only its calendar components
/// take part in period comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionRecord {
    pub id: String,
    pub task_id: String,
    pub completed_at: NaiveDateTime,
    pub completed_by_id: String,
}

/// A completion record the storage layer has not inserted yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCompletion {
    pub task_id: String,
    pub completed_at: NaiveDateTime,
    pub completed_by_id: String,
}
