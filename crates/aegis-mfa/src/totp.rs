//! RFC 6238 TOTP verification with clock-skew tolerance.

use crate::base32;
use crate::config::MfaConfig;
use crate::hotp::hotp;

/// Verifies time-based one-time codes against a base32 secret.
///
/// Every method is a pure function of its arguments — the current time
/// is always passed in, never read from a live clock.
#[derive(Debug, Clone)]
pub struct TotpVerifier {
    digits: u32,
    step_secs: u64,
    window: u64,
}

impl TotpVerifier {
    pub fn new(config: &MfaConfig) -> Self {
        Self {
            digits: config.digits,
            step_secs: config.step_secs,
            window: config.window,
        }
    }

    /// Check `code` against the secret at unix time `now`.
    ///
    /// Accepts codes computed for the current time step and for
    /// `window` steps on either side of it, tolerating that much clock
    /// drift between server and authenticator device. Malformed codes
    /// (wrong length or non-digit characters) are rejected outright.
    pub fn verify_at(&self, secret_base32: &str, code: &str, now: u64) -> bool {
        if !is_well_formed(code, self.digits) {
            return false;
        }

        let secret = base32::decode(secret_base32);
        let current = now / self.step_secs;
        let window = self.window as i64;

        (-window..=window).any(|delta| {
            current
                .checked_add_signed(delta)
                .is_some_and(|counter| hotp(&secret, counter, self.digits) == code)
        })
    }

    /// The code a correctly synchronized authenticator shows at `now`.
    pub fn code_at(&self, secret_base32: &str, now: u64) -> String {
        let secret = base32::decode(secret_base32);
        hotp(&secret, now / self.step_secs, self.digits)
    }
}

impl Default for TotpVerifier {
    fn default() -> Self {
        Self::new(&MfaConfig::default())
    }
}

/// True when `code` is exactly `digits` ASCII digits.
pub(crate) fn is_well_formed(code: &str, digits: u32) -> bool {
    code.len() == digits as usize && code.bytes().all(|b| b.is_ascii_digit())
}
