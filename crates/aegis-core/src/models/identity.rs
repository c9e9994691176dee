//! Identity domain model.
//!
//! Only the two-factor fields are part of this core's contract with the
//! storage collaborator; whatever else an identity record carries is
//! invisible to it.

use serde::{Deserialize, Serialize};

/// Identifier of an identity record in external storage.
pub type IdentityId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    /// Unpadded base32 TOTP secret (present only while enrolled).
    pub two_factor_secret: Option<String>,
    pub two_factor_enabled: bool,
    /// Unused single-use recovery codes, in issue order.
    pub backup_codes: Vec<String>,
}

impl Identity {
    /// A fresh record with two-factor authentication disabled.
    pub fn new(id: IdentityId) -> Self {
        Self {
            id,
            two_factor_secret: None,
            two_factor_enabled: false,
            backup_codes: Vec::new(),
        }
    }
}

/// Partial update applied atomically to an identity record.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateIdentity {
    /// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
    pub two_factor_secret: Option<Option<String>>,
    pub two_factor_enabled: Option<bool>,
    /// `Some(codes)` replaces the stored list wholesale.
    pub backup_codes: Option<Vec<String>>,
}
