use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::commands::shared::snapshot::load_snapshot;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckReport {
    tasks: usize,
    completions: usize,
    overrides: usize,
    valid: bool,
}

/// Handle `hearth check`.
///
/// Prints a summary on success and fails with the first validation problem.
pub fn handle(args: &SnapshotArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    snapshot.validate()?;

    let report = CheckReport {
        tasks: snapshot.tasks.len(),
        completions: snapshot.completions.len(),
        overrides: snapshot.overrides.len(),
        valid: true,
    };
    output(&report, flags.format)
}
