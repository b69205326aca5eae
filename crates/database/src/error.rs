use models::forms::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failures surfaced by the service layer
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted fields failed validation, nothing was written
    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationError),

    /// Requested record does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A new record points at a record that does not exist
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },

    /// A stored show points at a record that no longer exists
    #[error("show {show_id} references missing {entity} {id}")]
    DanglingReference {
        show_id: i32,
        entity: &'static str,
        id: i32,
    },

    /// The store rejected the operation, the transaction was rolled back
    #[error("database error: {0}")]
    Store(#[from] DbErr),
}
