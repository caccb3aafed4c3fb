//! # hearth-core
//!
//! Core types and error types for Hearth, the household chore engine.
//!
//! This crate provides the foundational types shared across all Hearth crates:
//! - Entity structs as the storage layer hands them over (tasks, completion
//!   records, per-date assignment overrides)
//! - Recurrence and rotation enums
//! - The tagged [`schedule::Schedule`] every engine operation dispatches on
//! - Write-side validation for the CRUD layer
//! - Household snapshot and response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod schedule;
pub mod snapshot;
mod validation;
