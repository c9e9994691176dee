//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations must apply each
//! write to a single identity atomically: two concurrent updates to the
//! same record must serialize, and [`IdentityRepository::replace_backup_codes`]
//! must behave as a compare-and-swap so that a raced backup code can
//! only be spent once.

use crate::error::AegisResult;
use crate::models::identity::{Identity, IdentityId, UpdateIdentity};

pub trait IdentityRepository: Send + Sync {
    /// Fetch an identity record by id.
    fn get(&self, id: IdentityId) -> impl Future<Output = AegisResult<Identity>> + Send;

    /// Apply a partial update to an identity record in one atomic write
    /// and return the updated record.
    fn update(
        &self,
        id: IdentityId,
        input: UpdateIdentity,
    ) -> impl Future<Output = AegisResult<Identity>> + Send;

    /// Replace the stored backup-code list, but only if it still equals
    /// `expected`. Fails with [`crate::error::AegisError::Conflict`] when
    /// another caller changed the list in between; the loser must
    /// re-read and retry against the stored state.
    fn replace_backup_codes(
        &self,
        id: IdentityId,
        expected: &[String],
        next: Vec<String>,
    ) -> impl Future<Output = AegisResult<Identity>> + Send;
}
