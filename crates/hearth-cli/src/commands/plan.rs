use hearth_engine::{plan_completion, plan_uncompletion};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{PlanCompleteArgs, PlanUncompleteArgs};
use crate::commands::shared::snapshot::load_snapshot_lenient;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hearth plan-complete`.
pub fn handle_complete(
    args: &PlanCompleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot_lenient(&args.input.snapshot)?;
    let task = snapshot.task(&args.task)?;
    let at = match args.at {
        Some(at) => at,
        None => ctx.now()?,
    };

    let plan = plan_completion(task, &snapshot.completions, at, &args.member);
    tracing::debug!(task = %task.id, member = %args.member, %at, "planned completion");
    output(&plan, flags.format)
}

/// Handle `hearth plan-uncomplete`.
pub fn handle_uncomplete(args: &PlanUncompleteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot_lenient(&args.input.snapshot)?;
    let task = snapshot.task(&args.task)?;

    output(&plan_uncompletion(task, &snapshot.completions), flags.format)
}
