// ## src/crypto/types.rs

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::cipher_ids;

/// Stable key size (both suites take 256-bit keys).
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Cipher suites (token registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CipherSuite {
    #[serde(rename = "aes-256-gcm")]
    Aes256Gcm = cipher_ids::AES256_GCM,
    #[serde(rename = "chacha20-poly1305")]
    Chacha20Poly1305 = cipher_ids::CHACHA20_POLY1305,
}

impl Default for CipherSuite {
    fn default() -> Self {
        CipherSuite::Aes256Gcm
    }
}

impl CipherSuite {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CipherSuite::Aes256Gcm => "aes-256-gcm",
            CipherSuite::Chacha20Poly1305 => "chacha20-poly1305",
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherSuite {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes-256-gcm" | "aes256gcm" | "aes" => Ok(CipherSuite::Aes256Gcm),
            "chacha20-poly1305" | "chacha20poly1305" | "chacha" => Ok(CipherSuite::Chacha20Poly1305),
            other => Err(CryptoError::Format(format!("unknown cipher suite: {other}"))),
        }
    }
}

#[derive(Debug)]
pub enum CryptoError {
    /// Unsupported cipher suite ID from a token.
    UnsupportedCipher { cipher_id: u8 },

    /// Unsupported token envelope version.
    UnsupportedVersion { version: u8 },

    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes for supported ciphers).
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// General runtime error with context.
    Failure(String),
    /// Malformed input (encoding, truncated envelope).
    Format(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            UnsupportedCipher { cipher_id } =>
                write!(f, "unsupported cipher suite: 0x{:02x}", cipher_id),
            UnsupportedVersion { version } =>
                write!(f, "unsupported token version: 0x{:02x}", version),
            InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected={}, actual={}", expected, actual),
            InvalidNonceLen { expected, actual } =>
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual),
            TagMismatch =>
                write!(f, "AEAD tag mismatch"),
            Failure(msg) =>
                write!(f, "crypto failure: {}", msg),
            Format(msg) =>
                write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Raised while building an [`Encryptor`](crate::crypto::Encryptor).
/// Fatal at startup: an operator has to supply usable keys.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Configuration error: 'SECRET_KEYS' must be a non-empty list of keys")]
    MissingKeys,

    #[error("Configuration error: secret key #{index} is invalid: {reason}")]
    InvalidKey { index: usize, reason: String },
}

/// Terminal per-token failure. Retrying with the same token and key set
/// cannot succeed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecryptionError {
    #[error("Decryption failed: invalid token or unknown encryption key")]
    InvalidToken,

    #[error("Decryption failed: plaintext is not valid UTF-8")]
    NotUtf8,
}

/// Failure while moving a token onto the primary key.
#[derive(Debug, thiserror::Error)]
pub enum RotateError {
    #[error(transparent)]
    Decrypt(#[from] DecryptionError),

    #[error(transparent)]
    Encrypt(#[from] CryptoError),
}
