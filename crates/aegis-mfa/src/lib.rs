//! AEGIS MFA — Two-factor authentication core: base32 secrets,
//! HOTP/TOTP one-time codes, single-use backup codes, and enrollment
//! payloads.

pub mod backup;
pub mod base32;
pub mod config;
pub mod enrollment;
pub mod error;
pub mod hotp;
pub mod secret;
pub mod service;
pub mod totp;

pub use config::MfaConfig;
pub use error::MfaError;
pub use service::{Enrollment, LoginVerification, TwoFactorService, VerifyMethod};
pub use totp::TotpVerifier;
