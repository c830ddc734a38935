//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus any response or insert shapes built from it. Request bodies are
//! validated in `charity_core::validation` and passed to repositories as-is.

pub mod campaign;
pub mod donation;
pub mod patient;
pub mod user;
