//! Salted password hashing and verification.
//!
//! A password is stretched with PBKDF2-HMAC-SHA-512 over a fresh random
//! salt and stored as a single `pbkdf2$<rounds>$<salt>$<key>` text record.
//! Verification re-derives the key from the parameters embedded in the
//! record and compares in constant time.
//!
//! Both operations are stateless; the only side effect is drawing salt
//! bytes from the OS random source during [`derive`]. The KDF call is
//! CPU-bound and deliberately slow, so keep it off latency-sensitive paths.

mod crypto;
mod error;
mod format;

pub use crate::crypto::{BASE_ITERATIONS, KEY_LEN, SALT_LEN};
pub use crate::error::FormatError;
pub use crate::format::{ALGORITHM_TAG, HashRecord};

use anyhow::{Context, Result};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Rounds multiplier used when the caller does not choose one.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Hashes a password with the default rounds multiplier.
///
/// See [`derive_with_rounds`].
pub fn derive(password: &str) -> Result<String> {
    derive_with_rounds(password, DEFAULT_ROUNDS)
}

/// Hashes a password and returns the encoded hash record.
///
/// Draws a fresh 16-byte salt from the OS random source, runs
/// PBKDF2-HMAC-SHA-512 for `10000 * rounds` iterations, and encodes the
/// result. Two calls with the same password produce different records.
///
/// There is no upper bound on `rounds` short of iteration-counter
/// overflow; callers choosing extreme values accept the latency cost.
///
/// # Errors
///
/// Returns an error if `rounds` is zero or overflows the iteration
/// counter, or if the OS random source fails.
pub fn derive_with_rounds(password: &str, rounds: u32) -> Result<String> {
    let salt = crypto::generate_salt().context("failed to generate salt")?;
    let salt_hex = hex::encode(salt);

    // The KDF consumes the hex text of the salt, matching the record.
    let key = Zeroizing::new(crypto::derive_key(password, salt_hex.as_bytes(), rounds)?);

    let record = HashRecord::new(rounds, salt_hex, hex::encode(key.as_slice()));
    Ok(format::serialize(&record))
}

/// Verifies a password against an encoded hash record.
///
/// Never returns an error: malformed records, unknown algorithm tags,
/// unparsable rounds fields, and bad hex all collapse to `false`, so a
/// caller cannot distinguish a bad record from a wrong password.
pub fn verify(password: &str, record: &str) -> bool {
    let record = match format::parse(record) {
        Ok(r) => r,
        Err(_) => return false,
    };

    let stored = match record.key_bytes() {
        Ok(k) => Zeroizing::new(k),
        Err(_) => return false,
    };

    let candidate = match crypto::derive_key(password, record.salt_hex().as_bytes(), record.rounds())
    {
        Ok(k) => Zeroizing::new(k),
        Err(_) => return false,
    };

    // subtle rejects mismatched lengths without inspecting the contents,
    // so a tampered key field cannot leak a byte position through timing.
    candidate.as_slice().ct_eq(stored.as_slice()).into()
}
