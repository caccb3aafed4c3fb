//! A consistent read of one household's task state.
//!
//! The storage layer loads tasks, completion records and assignment overrides
//! in one pass and hands them over as a [`HouseholdSnapshot`]. Engine calls
//! then slice it per task.

use std::collections::HashSet;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AssignmentOverride, CompletionRecord, Task};
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
    #[serde(default)]
    pub overrides: Vec<AssignmentOverride>,
}

impl HouseholdSnapshot {
    /// Look up a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no task has this id.
    pub fn task(&self, id: &str) -> Result<&Task, CoreError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "task".into(),
                id: id.into(),
            })
    }

    /// Completion records belonging to `task_id`.
    #[must_use]
    pub fn completions_for(&self, task_id: &str) -> Vec<CompletionRecord> {
        self.completions
            .iter()
            .filter(|record| record.task_id == task_id)
            .cloned()
            .collect()
    }

    /// Assignment overrides belonging to `task_id`.
    #[must_use]
    pub fn overrides_for(&self, task_id: &str) -> Vec<AssignmentOverride> {
        self.overrides
            .iter()
            .filter(|entry| entry.task_id == task_id)
            .cloned()
            .collect()
    }

    /// Check every task row plus the one-override-per-task-per-day rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`CoreError::Validation`] found.
    pub fn validate(&self) -> Result<(), CoreError> {
        for task in &self.tasks {
            task.validate().map_err(|error| match error {
                CoreError::Validation(message) => {
                    CoreError::Validation(format!("task {}: {message}", task.id))
                }
                other => other,
            })?;
        }

        let mut seen: HashSet<(&str, NaiveDate)> = HashSet::new();
        for entry in &self.overrides {
            if !seen.insert((entry.task_id.as_str(), entry.date)) {
                return Err(CoreError::Validation(format!(
                    "duplicate assignment override for task {} on {}",
                    entry.task_id, entry.date
                )));
            }
        }
        Ok(())
    }
}
