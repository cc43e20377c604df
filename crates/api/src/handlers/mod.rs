//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `rigforge_db` and
//! map errors via [`crate::error::AppError`].

pub mod builds;
pub mod estimation;
pub mod parts;
