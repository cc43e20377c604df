//! Domain error type shared across the workspace.

use crate::types::DbId;

/// A domain-level error.
///
/// The API layer maps these onto HTTP responses; core code never decides
/// status codes itself.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist (or no longer exists).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation check.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
