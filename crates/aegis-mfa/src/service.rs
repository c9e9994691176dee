//! Two-factor account service — enable/disable/verify orchestration.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::models::identity::{IdentityId, UpdateIdentity};
use aegis_core::repository::IdentityRepository;
use tracing::{debug, info, warn};

use crate::backup;
use crate::config::MfaConfig;
use crate::enrollment;
use crate::error::MfaError;
use crate::secret;
use crate::totp::{self, TotpVerifier};

/// Payload for a new enrollment, shown to the user exactly once.
#[derive(Debug, Clone)]
pub struct Enrollment {
    /// Unpadded base32 secret for manual entry.
    pub secret: String,
    /// `otpauth://` URI for QR rendering.
    pub otpauth_uri: String,
}

/// How a login code was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMethod {
    Totp,
    BackupCode,
}

/// Outcome of a login verification.
///
/// A well-formed code that simply does not match is `Rejected`, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginVerification {
    Accepted { method: VerifyMethod },
    Rejected,
}

/// Two-factor account service.
///
/// Generic over the identity repository so this crate has no dependency
/// on any storage engine. Constructed with explicit dependencies — no
/// process-wide state.
pub struct TwoFactorService<R: IdentityRepository> {
    repo: R,
    config: MfaConfig,
    verifier: TotpVerifier,
}

impl<R: IdentityRepository> TwoFactorService<R> {
    pub fn new(repo: R, config: MfaConfig) -> Self {
        let verifier = TotpVerifier::new(&config);
        Self {
            repo,
            config,
            verifier,
        }
    }

    /// Provision a fresh secret and enrollment payload for an identity.
    ///
    /// Performs no write — the secret becomes authoritative only once
    /// the caller confirms enrollment through [`TwoFactorService::enable`].
    pub fn start_enrollment(&self, label: &str) -> Enrollment {
        let secret = secret::generate_secret_with(&mut rand::rng(), self.config.secret_len);
        let otpauth_uri = enrollment::otpauth_uri(label, &secret, &self.config.issuer);
        Enrollment {
            secret,
            otpauth_uri,
        }
    }

    /// Turn two-factor authentication on for an identity.
    ///
    /// Issues a fresh backup-code set and persists secret, flag, and
    /// codes in a single atomic update, replacing any prior enrollment
    /// wholesale. Returns the backup codes for one-time display.
    pub async fn enable(&self, id: IdentityId, secret_base32: &str) -> AegisResult<Vec<String>> {
        let codes = backup::generate_codes_with(
            &mut rand::rng(),
            self.config.backup_code_count,
            self.config.backup_code_len,
        );

        self.repo
            .update(
                id,
                UpdateIdentity {
                    two_factor_secret: Some(Some(secret_base32.to_string())),
                    two_factor_enabled: Some(true),
                    backup_codes: Some(codes.clone()),
                },
            )
            .await?;

        info!(identity = id, "two-factor authentication enabled");
        Ok(codes)
    }

    /// Turn two-factor authentication off for an identity.
    ///
    /// Clears secret, flag, and backup codes together. A no-op for an
    /// identity that is already disabled.
    pub async fn disable(&self, id: IdentityId) -> AegisResult<()> {
        self.repo
            .update(
                id,
                UpdateIdentity {
                    two_factor_secret: Some(None),
                    two_factor_enabled: Some(false),
                    backup_codes: Some(Vec::new()),
                },
            )
            .await?;

        info!(identity = id, "two-factor authentication disabled");
        Ok(())
    }

    /// Check a login code for an identity at unix time `now`.
    ///
    /// Tries TOTP first; a TOTP accept performs no write. Otherwise the
    /// code is tried against the stored backup codes, and an accepted
    /// backup code is removed from storage before the call returns.
    pub async fn verify_login(
        &self,
        id: IdentityId,
        code: &str,
        now: u64,
    ) -> AegisResult<LoginVerification> {
        let identity = self.repo.get(id).await?;
        if !identity.two_factor_enabled {
            return Err(MfaError::NotEnabled.into());
        }

        let totp_shaped = totp::is_well_formed(code, self.config.digits);
        let backup_shaped = backup::is_well_formed(code, self.config.backup_code_len);
        if !totp_shaped && !backup_shaped {
            return Err(MfaError::InvalidCode(format!(
                "expected {} digits or a {}-character backup code",
                self.config.digits, self.config.backup_code_len,
            ))
            .into());
        }

        let stored_secret = identity.two_factor_secret.as_deref().unwrap_or_default();
        if totp_shaped && self.verifier.verify_at(stored_secret, code, now) {
            return Ok(LoginVerification::Accepted {
                method: VerifyMethod::Totp,
            });
        }

        if backup_shaped {
            return self.consume_backup_code(id, identity.backup_codes, code).await;
        }

        Ok(LoginVerification::Rejected)
    }

    /// Consume a backup code through the repository's compare-and-swap,
    /// retrying on conflict so a raced code can only be spent once.
    async fn consume_backup_code(
        &self,
        id: IdentityId,
        mut current: Vec<String>,
        code: &str,
    ) -> AegisResult<LoginVerification> {
        loop {
            let Some(remaining) = backup::consume(&current, code) else {
                return Ok(LoginVerification::Rejected);
            };

            match self.repo.replace_backup_codes(id, &current, remaining).await {
                Ok(_) => {
                    debug!(identity = id, "backup code consumed");
                    return Ok(LoginVerification::Accepted {
                        method: VerifyMethod::BackupCode,
                    });
                }
                Err(AegisError::Conflict { .. }) => {
                    warn!(identity = id, "backup code raced, re-reading");
                    current = self.repo.get(id).await?.backup_codes;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
