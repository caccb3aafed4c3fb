//! Cross-cutting error types for Hearth.
//!
//! The engine's read path never fails; these errors come from the write-side
//! validation helpers and from snapshot lookups in the binary.

use thiserror::Error;

/// Errors that can be raised by any Hearth crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (ranges, rotation shape, recurrence mismatch).
    #[error("Validation error: {0}")]
    Validation(String),
}
