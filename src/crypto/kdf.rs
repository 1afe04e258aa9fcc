use anyhow::Result;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;

use super::{BASE_ITERATIONS, KEY_LEN};

/// Computes the PBKDF2 iteration count for a rounds multiplier.
///
/// # Errors
///
/// Returns an error if the multiplier is zero or would overflow the
/// iteration counter.
pub fn effective_iterations(rounds: u32) -> Result<u32> {
    if rounds < 1 {
        anyhow::bail!("rounds multiplier must be >= 1");
    }

    BASE_ITERATIONS
        .checked_mul(rounds)
        .ok_or_else(|| anyhow::anyhow!("rounds multiplier too large"))
}

/// Derives a key from a password and salt with PBKDF2-HMAC-SHA-512.
///
/// The salt is fed to the KDF exactly as it appears in the encoded record,
/// as lowercase hex text, so records verify against existing stored hashes.
pub fn derive_key(password: &str, salt: &[u8], rounds: u32) -> Result<[u8; KEY_LEN]> {
    let iterations = effective_iterations(rounds)?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt, iterations, &mut key);

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdf_is_deterministic() {
        let salt = b"00112233445566778899aabbccddeeff";

        let k1 = derive_key("password", salt, 1).unwrap();
        let k2 = derive_key("password", salt, 1).unwrap();

        assert_eq!(k1, k2);
    }

    #[test]
    fn kdf_rounds_affect_output() {
        let salt = b"00112233445566778899aabbccddeeff";

        let k1 = derive_key("pw", salt, 1).unwrap();
        let k2 = derive_key("pw", salt, 2).unwrap();

        assert_ne!(k1, k2);
    }

    #[test]
    fn kdf_salt_affects_output() {
        let k1 = derive_key("pw", b"00112233445566778899aabbccddeeff", 1).unwrap();
        let k2 = derive_key("pw", b"ff112233445566778899aabbccddee00", 1).unwrap();

        assert_ne!(k1, k2);
    }

    #[test]
    fn kdf_zero_rounds_fails() {
        assert!(derive_key("pw", b"salt", 0).is_err());
    }

    #[test]
    fn effective_iterations_scale_with_rounds() {
        assert_eq!(effective_iterations(1).unwrap(), 10_000);
        assert_eq!(effective_iterations(2).unwrap(), 20_000);
        assert_eq!(effective_iterations(10).unwrap(), 100_000);
    }

    #[test]
    fn effective_iterations_overflow_fails() {
        assert!(effective_iterations(u32::MAX).is_err());
    }
}
