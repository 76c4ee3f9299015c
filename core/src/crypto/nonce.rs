// ## 📂 File: `src/crypto/nonce.rs`

//! crypto/nonce.rs
//! Random per-token nonce generation.
//!
//! Design:
//! - Every token carries its own 12-byte nonce drawn from the OS RNG.
//! - Tokens are independent of each other, so there is no counter to persist
//!   and no shared state between callers.
//!
//! Security notes:
//! - 96-bit random nonces stay collision-safe well past 2^32 tokens per key.
//!   Rotate the primary key long before that.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CryptoError, NONCE_LEN_12};

/// Draw a fresh 12-byte AEAD nonce.
#[inline]
pub fn random_nonce_12() -> [u8; NONCE_LEN_12] {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Reject nonce lengths the supported suites cannot take.
#[inline]
pub fn validate_nonce_len(nonce_len: usize) -> Result<(), CryptoError> {
    if nonce_len != NONCE_LEN_12 {
        return Err(CryptoError::InvalidNonceLen {
            expected: NONCE_LEN_12,
            actual: nonce_len,
        });
    }
    Ok(())
}
