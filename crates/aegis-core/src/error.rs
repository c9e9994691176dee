//! Error types for the AEGIS system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AegisError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Concurrent update conflict on {entity}: {reason}")]
    Conflict { entity: String, reason: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AegisResult<T> = Result<T, AegisError>;
