//! Cryptographic primitives for password hashing.
//!
//! Provides key derivation and salt generation.

pub mod kdf;
pub mod random;

pub use kdf::{derive_key, effective_iterations};
pub use random::generate_salt;

/// Length of the salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the derived key (64 bytes).
pub const KEY_LEN: usize = 64;
/// Base PBKDF2 iteration count; multiplied by the rounds value of each record.
pub const BASE_ITERATIONS: u32 = 10_000;
