//! Row models and DTOs.
//!
//! Each submodule contains the `FromRow` entity struct matching the
//! database row plus the `Deserialize` DTOs accepted by the write paths.

pub mod build;
pub mod part;
