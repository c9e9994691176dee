//! Two-factor error types.

use aegis_core::error::AegisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MfaError {
    /// The supplied code is structurally malformed — wrong length or
    /// character class. A well-formed code that merely does not match
    /// is a rejection, not an error.
    #[error("malformed code: {0}")]
    InvalidCode(String),

    #[error("two-factor authentication is not enabled for this identity")]
    NotEnabled,
}

impl From<MfaError> for AegisError {
    fn from(err: MfaError) -> Self {
        match err {
            MfaError::InvalidCode(_) => AegisError::Validation {
                message: err.to_string(),
            },
            MfaError::NotEnabled => AegisError::AuthenticationFailed {
                reason: err.to_string(),
            },
        }
    }
}
