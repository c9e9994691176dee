//! In-memory [`IdentityRepository`] for tests and embedded use.
//!
//! A single mutex serializes every write, which satisfies the
//! per-identity atomicity the repository contract requires. Handles are
//! cheap to clone and share the same underlying map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{AegisError, AegisResult};
use crate::models::identity::{Identity, IdentityId, UpdateIdentity};
use crate::repository::IdentityRepository;

#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityRepository {
    records: Arc<Mutex<HashMap<IdentityId, Identity>>>,
}

impl MemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, overwriting any existing one with the same id.
    pub fn insert(&self, identity: Identity) {
        self.records
            .lock()
            .expect("identity map lock poisoned")
            .insert(identity.id, identity);
    }
}

fn not_found(id: IdentityId) -> AegisError {
    AegisError::NotFound {
        entity: "identity".into(),
        id: id.to_string(),
    }
}

impl IdentityRepository for MemoryIdentityRepository {
    async fn get(&self, id: IdentityId) -> AegisResult<Identity> {
        self.records
            .lock()
            .expect("identity map lock poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: IdentityId, input: UpdateIdentity) -> AegisResult<Identity> {
        let mut records = self.records.lock().expect("identity map lock poisoned");
        let record = records.get_mut(&id).ok_or_else(|| not_found(id))?;

        if let Some(secret) = input.two_factor_secret {
            record.two_factor_secret = secret;
        }
        if let Some(enabled) = input.two_factor_enabled {
            record.two_factor_enabled = enabled;
        }
        if let Some(codes) = input.backup_codes {
            record.backup_codes = codes;
        }

        Ok(record.clone())
    }

    async fn replace_backup_codes(
        &self,
        id: IdentityId,
        expected: &[String],
        next: Vec<String>,
    ) -> AegisResult<Identity> {
        let mut records = self.records.lock().expect("identity map lock poisoned");
        let record = records.get_mut(&id).ok_or_else(|| not_found(id))?;

        if record.backup_codes != expected {
            return Err(AegisError::Conflict {
                entity: "identity".into(),
                reason: "backup codes changed since read".into(),
            });
        }

        record.backup_codes = next;
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryIdentityRepository {
        let repo = MemoryIdentityRepository::new();
        repo.insert(Identity::new(1));
        repo
    }

    #[tokio::test]
    async fn get_missing_record_fails() {
        let repo = MemoryIdentityRepository::new();
        let err = repo.get(99).await.unwrap_err();
        assert!(matches!(err, AegisError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_sets_and_clears_fields() {
        let repo = seeded();

        let updated = repo
            .update(
                1,
                UpdateIdentity {
                    two_factor_secret: Some(Some("SECRET".into())),
                    two_factor_enabled: Some(true),
                    backup_codes: Some(vec!["AAAA1111".into()]),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.two_factor_secret.as_deref(), Some("SECRET"));
        assert!(updated.two_factor_enabled);

        let cleared = repo
            .update(
                1,
                UpdateIdentity {
                    two_factor_secret: Some(None),
                    two_factor_enabled: Some(false),
                    backup_codes: Some(Vec::new()),
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.two_factor_secret, None);
        assert!(!cleared.two_factor_enabled);
        assert!(cleared.backup_codes.is_empty());
    }

    #[tokio::test]
    async fn update_leaves_unspecified_fields_alone() {
        let repo = seeded();
        repo.update(
            1,
            UpdateIdentity {
                two_factor_secret: Some(Some("SECRET".into())),
                two_factor_enabled: Some(true),
                backup_codes: Some(vec!["AAAA1111".into()]),
            },
        )
        .await
        .unwrap();

        let updated = repo
            .update(
                1,
                UpdateIdentity {
                    two_factor_enabled: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.two_factor_secret.as_deref(), Some("SECRET"));
        assert_eq!(updated.backup_codes, vec!["AAAA1111".to_string()]);
    }

    #[tokio::test]
    async fn replace_backup_codes_is_conditional() {
        let repo = seeded();
        let original = vec!["AAAA1111".to_string(), "BBBB2222".to_string()];
        repo.update(
            1,
            UpdateIdentity {
                backup_codes: Some(original.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // First swap wins.
        let updated = repo
            .replace_backup_codes(1, &original, vec!["BBBB2222".into()])
            .await
            .unwrap();
        assert_eq!(updated.backup_codes, vec!["BBBB2222".to_string()]);

        // Second swap against the stale list loses.
        let err = repo
            .replace_backup_codes(1, &original, vec!["AAAA1111".into()])
            .await
            .unwrap_err();
        assert!(matches!(err, AegisError::Conflict { .. }));
    }

    #[tokio::test]
    async fn concurrent_swaps_have_a_single_winner() {
        let repo = seeded();
        let original = vec!["AAAA1111".to_string(), "BBBB2222".to_string()];
        repo.update(
            1,
            UpdateIdentity {
                backup_codes: Some(original.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let a = {
            let repo = repo.clone();
            let expected = original.clone();
            tokio::spawn(
                async move { repo.replace_backup_codes(1, &expected, Vec::new()).await },
            )
        };
        let b = {
            let repo = repo.clone();
            let expected = original.clone();
            tokio::spawn(
                async move { repo.replace_backup_codes(1, &expected, Vec::new()).await },
            )
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1, "exactly one swap must win: {results:?}");
    }
}
