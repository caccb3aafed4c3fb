use chrono::NaiveDate;
use hearth_core::responses::TaskSnapshot;
use hearth_core::snapshot::HouseholdSnapshot;
use hearth_engine::{StreakLimits, evaluate_household, evaluate_task};
use serde::Serialize;

use crate::cli::root_commands::StatusArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::snapshot::load_snapshot_lenient;
use crate::context::AppContext;
use crate::output::output;

/// One line of `hearth status --format table`.
#[derive(Debug, Serialize)]
struct StatusRow {
    task_id: String,
    title: String,
    recurrence: String,
    due: bool,
    scheduled: bool,
    assignee_id: Option<String>,
    done_this_period: usize,
    streak: u32,
}

impl From<&TaskSnapshot> for StatusRow {
    fn from(snap: &TaskSnapshot) -> Self {
        Self {
            task_id: snap.task_id.clone(),
            title: snap.title.clone(),
            recurrence: snap.recurrence.to_string(),
            due: snap.due,
            scheduled: snap.scheduled,
            assignee_id: snap.assignee_id.clone(),
            done_this_period: snap.completions_this_period.len(),
            streak: snap.streak,
        }
    }
}

/// Handle `hearth status`.
pub fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot_lenient(&args.input.snapshot)?;
    let date = match args.date {
        Some(date) => date,
        None => ctx.today()?,
    };

    let snaps = evaluate(
        &snapshot,
        args.task.as_deref(),
        args.due_only,
        date,
        ctx.streak_limits(),
    )?;
    tracing::debug!(%date, tasks = snaps.len(), "evaluated household");

    match flags.format {
        OutputFormat::Table => {
            let rows = snaps.iter().map(StatusRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&snaps, flags.format),
    }
}

fn evaluate(
    snapshot: &HouseholdSnapshot,
    task_id: Option<&str>,
    due_only: bool,
    date: NaiveDate,
    limits: StreakLimits,
) -> anyhow::Result<Vec<TaskSnapshot>> {
    let mut snaps = match task_id {
        Some(id) => {
            let task = snapshot.task(id)?;
            vec![evaluate_task(
                task,
                &snapshot.completions_for(id),
                &snapshot.overrides_for(id),
                date,
                limits,
            )]
        }
        None => evaluate_household(snapshot, date, limits),
    };

    if due_only {
        snaps.retain(|snap| snap.due);
    }
    Ok(snaps)
}
