//! Two-factor configuration.

/// Configuration for the two-factor service.
#[derive(Debug, Clone)]
pub struct MfaConfig {
    /// Issuer name shown in authenticator apps.
    pub issuer: String,
    /// Number of digits in a one-time code (default: 6).
    pub digits: u32,
    /// TOTP time step in seconds (default: 30).
    pub step_secs: u64,
    /// Accepted clock-drift window, in steps on each side (default: 1).
    pub window: u64,
    /// Secret length in bytes before base32 encoding (default: 20).
    pub secret_len: usize,
    /// Number of backup codes issued per enrollment (default: 10).
    pub backup_code_count: usize,
    /// Length of each backup code in characters (default: 8).
    pub backup_code_len: usize,
}

impl Default for MfaConfig {
    fn default() -> Self {
        Self {
            issuer: "AEGIS".into(),
            digits: 6,
            step_secs: 30,
            window: 1,
            secret_len: 20,
            backup_code_count: 10,
            backup_code_len: 8,
        }
    }
}

impl MfaConfig {
    /// Config with the given issuer and defaults for everything else.
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            ..Default::default()
        }
    }
}
