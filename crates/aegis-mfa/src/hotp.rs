//! RFC 4226 HOTP — HMAC-based one-time passwords.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Compute the HOTP code for a secret and counter.
///
/// Serializes `counter` as 8 big-endian bytes, computes HMAC-SHA1 over
/// it with `secret` as key, applies the RFC 4226 dynamic truncation,
/// and formats the result as exactly `digits` decimal digits,
/// zero-padded.
pub fn hotp(secret: &[u8], counter: u64, digits: u32) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC-SHA1 accepts keys of any length");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let truncated = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let code = truncated % 10u32.pow(digits);
    format!("{code:0width$}", width = digits as usize)
}
