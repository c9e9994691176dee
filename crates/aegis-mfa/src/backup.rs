//! Single-use backup codes for account recovery.

use rand::{CryptoRng, Rng};
use subtle::ConstantTimeEq;

/// Characters a backup code is built from.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate `count` distinct backup codes of `length` uppercase
/// alphanumeric characters each.
///
/// An in-batch collision is regenerated rather than assumed away.
pub fn generate_codes_with<R: Rng + CryptoRng>(
    rng: &mut R,
    count: usize,
    length: usize,
) -> Vec<String> {
    let mut codes: Vec<String> = Vec::with_capacity(count);
    while codes.len() < count {
        let code: String = (0..length)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

/// Generate the default set (10 codes of 8 characters) from the
/// thread-local CSPRNG.
pub fn generate_codes() -> Vec<String> {
    generate_codes_with(&mut rand::rng(), 10, 8)
}

/// Attempt to consume `supplied` from `existing`.
///
/// The supplied code is uppercased before comparison. On a match,
/// returns the remaining codes with their original relative order;
/// `None` when nothing matched. Pure over its arguments — replay
/// protection depends on the caller persisting the shrunk list before
/// honoring a second attempt.
pub fn consume(existing: &[String], supplied: &str) -> Option<Vec<String>> {
    let normalized = supplied.to_uppercase();
    let index = existing
        .iter()
        .position(|code| constant_time_eq(code, &normalized))?;

    let mut remaining = existing.to_vec();
    remaining.remove(index);
    Some(remaining)
}

/// True when `code` has the shape of a backup code.
pub(crate) fn is_well_formed(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
