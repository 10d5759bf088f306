//! harbor-core
//!
//! Pure domain types for the Harbor behavioral-health record system.
//! No service or storage dependency — this is the shared vocabulary the
//! rest of the workspace builds on.

pub mod error;
pub mod models;
