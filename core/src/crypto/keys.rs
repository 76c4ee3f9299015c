//! crypto/keys.rs
//! Secret key material: parsing, generation and encoding.
//!
//! A key string is URL-safe base64 of 32 random bytes. Padding is optional on
//! input and always emitted on output.

use std::fmt;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::{CryptoError, KEY_LEN_32};

/// URL-safe decoder that accepts padded and unpadded input.
pub(crate) const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// 256-bit symmetric key.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN_32]);

impl SecretKey {
    /// Parse an encoded key string. Surrounding whitespace is ignored.
    pub fn parse(encoded: &str) -> Result<Self, CryptoError> {
        let raw = URL_SAFE_LENIENT
            .decode(encoded.trim())
            .map_err(|e| CryptoError::Format(format!("key is not URL-safe base64: {e}")))?;

        let bytes: [u8; KEY_LEN_32] = raw.as_slice().try_into().map_err(|_| {
            CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: raw.len(),
            }
        })?;
        Ok(Self(bytes))
    }

    /// Fresh key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN_32];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN_32]) -> Self {
        Self(bytes)
    }

    /// Padded URL-safe base64, the form stored in settings.
    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN_32] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}
