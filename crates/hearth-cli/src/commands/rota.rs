use chrono::{Datelike, NaiveDate};
use hearth_core::entities::{AssignmentOverride, Task};
use hearth_engine::{is_scheduled_for_date, resolve_assignee};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RotaArgs;
use crate::commands::shared::snapshot::load_snapshot_lenient;
use crate::context::AppContext;
use crate::output::output;

/// Who holds a task on one calendar day.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RotaEntry {
    pub date: NaiveDate,
    pub weekday: String,
    pub scheduled: bool,
    pub assignee_id: Option<String>,
}

/// Handle `hearth rota`.
pub fn handle(args: &RotaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot_lenient(&args.input.snapshot)?;
    let task = snapshot.task(&args.task)?;
    let from = match args.from {
        Some(date) => date,
        None => ctx.today()?,
    };

    let overrides = snapshot.overrides_for(&task.id);
    output(&rota(task, &overrides, from, args.days), flags.format)
}

fn rota(
    task: &Task,
    overrides: &[AssignmentOverride],
    from: NaiveDate,
    days: u32,
) -> Vec<RotaEntry> {
    from.iter_days()
        .take(days as usize)
        .map(|date| RotaEntry {
            date,
            weekday: date.weekday().to_string(),
            scheduled: is_scheduled_for_date(task, date),
            assignee_id: resolve_assignee(task, overrides, date).map(str::to_owned),
        })
        .collect()
}
