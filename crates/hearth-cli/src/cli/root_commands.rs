use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Due state, schedule, assignee and streak for each task.
    Status(StatusArgs),
    /// Who is responsible for a task over a range of days.
    Rota(RotaArgs),
    /// Show what completing a task would write.
    PlanComplete(PlanCompleteArgs),
    /// Show what undoing the latest completion would write.
    PlanUncomplete(PlanUncompleteArgs),
    /// Check a snapshot file for malformed task rows and duplicate overrides.
    Check(SnapshotArgs),
    /// Print the JSON Schema of the snapshot file format.
    Schema,
}

/// Household snapshot input.
#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// JSON file with `tasks`, `completions` and `overrides`.
    #[arg(short, long)]
    pub snapshot: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,
    /// Evaluate as of this day (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
    /// Only this task.
    #[arg(short, long)]
    pub task: Option<String>,
    /// Hide tasks that are not due.
    #[arg(long)]
    pub due_only: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RotaArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,
    #[arg(short, long)]
    pub task: String,
    /// First day (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Number of days to list.
    #[arg(long, default_value_t = 14)]
    pub days: u32,
}

#[derive(Clone, Debug, Args)]
pub struct PlanCompleteArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,
    #[arg(short, long)]
    pub task: String,
    /// Member completing the task.
    #[arg(short, long)]
    pub member: String,
    /// Completion time (YYYY-MM-DDTHH:MM:SS). Defaults to now.
    #[arg(long)]
    pub at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Args)]
pub struct PlanUncompleteArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,
    #[arg(short, long)]
    pub task: String,
}
