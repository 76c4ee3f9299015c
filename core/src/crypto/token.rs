//! crypto/token.rs
//! Token envelope layout.
//!
//! ```text
//! 0      1      2            14                      len
//! +------+------+------------+-----------------------+
//! | ver  | suite| nonce (12) | ciphertext || tag(16) |
//! +------+------+------------+-----------------------+
//! ```
//!
//! The whole envelope is rendered as padded URL-safe base64. The two prefix
//! bytes are the AEAD associated data, so neither can be altered without the
//! tag check failing.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::constants::TOKEN_V1;
use crate::crypto::keys::URL_SAFE_LENIENT;
use crate::crypto::nonce::validate_nonce_len;
use crate::crypto::types::{CipherSuite, CryptoError, NONCE_LEN_12, TAG_LEN};

/// Version + suite.
pub const PREFIX_LEN: usize = 2;

/// Smallest valid envelope: empty plaintext.
pub const MIN_ENVELOPE_LEN: usize = PREFIX_LEN + NONCE_LEN_12 + TAG_LEN;

/// Decoded token, borrowed pieces are copied out once so every key attempt
/// reuses the same parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEnvelope {
    pub suite: CipherSuite,
    pub nonce: [u8; NONCE_LEN_12],
    pub ciphertext: Vec<u8>,
}

impl TokenEnvelope {
    pub fn new(suite: CipherSuite, nonce: &[u8], ciphertext: Vec<u8>) -> Result<Self, CryptoError> {
        validate_nonce_len(nonce.len())?;
        let mut n = [0u8; NONCE_LEN_12];
        n.copy_from_slice(nonce);
        Ok(Self { suite, nonce: n, ciphertext })
    }

    /// Associated data bound into the tag.
    pub fn aad(&self) -> [u8; PREFIX_LEN] {
        aad_for(self.suite)
    }

    /// Render as a token string.
    pub fn encode(&self) -> String {
        let mut buf = Vec::with_capacity(PREFIX_LEN + NONCE_LEN_12 + self.ciphertext.len());
        buf.extend_from_slice(&self.aad());
        buf.extend_from_slice(&self.nonce);
        buf.extend_from_slice(&self.ciphertext);
        URL_SAFE.encode(buf)
    }

    /// Parse a token string. Structural problems only; authenticity is the
    /// caller's job.
    pub fn decode(token: &str) -> Result<Self, CryptoError> {
        let raw = URL_SAFE_LENIENT
            .decode(token.trim())
            .map_err(|e| CryptoError::Format(format!("token is not URL-safe base64: {e}")))?;

        if raw.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::Format(format!(
                "token too short: have={}, need>={}",
                raw.len(),
                MIN_ENVELOPE_LEN
            )));
        }

        if raw[0] != TOKEN_V1 {
            return Err(CryptoError::UnsupportedVersion { version: raw[0] });
        }

        let suite = CipherSuite::try_from(raw[1])
            .map_err(|_| CryptoError::UnsupportedCipher { cipher_id: raw[1] })?;

        let body = &raw[PREFIX_LEN..];
        Self::new(suite, &body[..NONCE_LEN_12], body[NONCE_LEN_12..].to_vec())
    }
}

#[inline]
pub fn aad_for(suite: CipherSuite) -> [u8; PREFIX_LEN] {
    [TOKEN_V1, suite.id()]
}
