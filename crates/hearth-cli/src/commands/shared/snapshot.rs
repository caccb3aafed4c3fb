use std::path::Path;

use anyhow::Context;
use hearth_core::snapshot::HouseholdSnapshot;

/// Read and parse a household snapshot JSON file.
pub fn load_snapshot(path: &Path) -> anyhow::Result<HouseholdSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: HouseholdSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        tasks = snapshot.tasks.len(),
        completions = snapshot.completions.len(),
        overrides = snapshot.overrides.len(),
        "loaded household snapshot"
    );
    Ok(snapshot)
}

/// Like [`load_snapshot`], but logs a warning when the rows would be rejected
/// on write. Reads still go ahead since evaluation tolerates bad rows.
pub fn load_snapshot_lenient(path: &Path) -> anyhow::Result<HouseholdSnapshot> {
    let snapshot = load_snapshot(path)?;
    if let Err(error) = snapshot.validate() {
        tracing::warn!(%error, "snapshot contains invalid rows");
    }
    Ok(snapshot)
}
