//! Domain-level error types.

use thiserror::Error;

/// Reasons a post body is rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("id in body ({body_id}) does not match id in path ({path_id})")]
    IdMismatch { path_id: String, body_id: String },
}

impl ValidationError {
    /// Machine-readable reason returned to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "missing_field",
            ValidationError::IdMismatch { .. } => "id_mismatch",
        }
    }

    /// The offending request field, using wire names.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::IdMismatch { .. } => "id",
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}
