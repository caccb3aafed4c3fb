//! Entity structs for Hearth domain objects.
//!
//! Each entity mirrors a row shape supplied by the household storage layer.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation of snapshot files.

mod assignment_override;
mod completion;
mod task;

pub use assignment_override::AssignmentOverride;
pub use completion::{CompletionRecord, NewCompletion};
pub use task::Task;
