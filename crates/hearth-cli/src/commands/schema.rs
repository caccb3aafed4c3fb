use hearth_core::snapshot::HouseholdSnapshot;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `hearth schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(HouseholdSnapshot);
    output(&schema, flags.format)
}
