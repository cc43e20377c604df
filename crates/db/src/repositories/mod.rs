//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod build_repo;
pub mod part_repo;

pub use build_repo::BuildRepo;
pub use part_repo::PartRepo;
