//! Secret provisioning for authenticator enrollment.

use rand::{CryptoRng, Rng};

use crate::base32;

/// Default secret length in bytes (160 bits, the RFC 4226 recommended
/// minimum).
pub const SECRET_LEN: usize = 20;

/// Generate a fresh secret with the given random source: `len` random
/// bytes rendered as unpadded base32.
pub fn generate_secret_with<R: Rng + CryptoRng>(rng: &mut R, len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    base32::encode(&bytes)
}

/// Generate a fresh 20-byte secret (32 base32 characters) from the
/// thread-local CSPRNG.
pub fn generate_secret() -> String {
    generate_secret_with(&mut rand::rng(), SECRET_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_is_32_canonical_characters() {
        let secret = generate_secret();
        assert_eq!(secret.len(), 32);
        assert!(
            secret
                .bytes()
                .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
        );
    }

    #[test]
    fn secret_decodes_to_20_bytes() {
        let secret = generate_secret();
        assert_eq!(base32::decode(&secret).len(), SECRET_LEN);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = generate_secret_with(&mut StdRng::seed_from_u64(7), SECRET_LEN);
        let b = generate_secret_with(&mut StdRng::seed_from_u64(7), SECRET_LEN);
        assert_eq!(a, b);

        let c = generate_secret_with(&mut StdRng::seed_from_u64(8), SECRET_LEN);
        assert_ne!(a, c);
    }

    #[test]
    fn fresh_secrets_differ() {
        assert_ne!(generate_secret(), generate_secret());
    }
}
