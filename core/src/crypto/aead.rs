// ## 📂 File: `src/crypto/aead.rs`

//! src/crypto/aead.rs
//! AEAD interface for AES-256-GCM and ChaCha20-Poly1305.
//!
//! Design notes:
//! - Both ciphers use 32-byte keys and 12-byte nonces.
//! - Tag verification is constant-time and must fail closed (no partial plaintext).
//! - Caller provides nonce and AAD (the token prefix) per call.
//! - Cipher selection is driven by the suite byte of the token.

use crate::crypto::types::{CipherSuite, CryptoError};
use crate::crypto::types::{KEY_LEN_32, NONCE_LEN_12, TAG_LEN};

use aes_gcm::aead::{Aead, KeyInit, Payload};

// Concrete AEAD types
use aes_gcm::{Aes256Gcm, Nonce as AesNonce};                // 32-byte key, 12-byte nonce
use chacha20poly1305::{ChaCha20Poly1305, Nonce as ChaNonce}; // 32-byte key, 12-byte nonce

/// Unified AEAD cipher implementation selected by suite.
#[derive(Clone)]
pub enum AeadImpl {
    AesGcm(Aes256Gcm),
    ChaCha(ChaCha20Poly1305),
}

impl AeadImpl {
    /// Construct the AEAD implementation for `suite` from raw key bytes.
    pub fn new(suite: CipherSuite, key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN_32 {
            return Err(CryptoError::InvalidKeyLen {
                expected: KEY_LEN_32,
                actual: key.len(),
            });
        }

        match suite {
            CipherSuite::Aes256Gcm => {
                let cipher = Aes256Gcm::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen {
                        expected: KEY_LEN_32,
                        actual: key.len(),
                    })?;
                Ok(Self::AesGcm(cipher))
            }
            CipherSuite::Chacha20Poly1305 => {
                let cipher = ChaCha20Poly1305::new_from_slice(key)
                    .map_err(|_| CryptoError::InvalidKeyLen {
                        expected: KEY_LEN_32,
                        actual: key.len(),
                    })?;
                Ok(Self::ChaCha(cipher))
            }
        }
    }

    pub fn suite(&self) -> CipherSuite {
        match self {
            AeadImpl::AesGcm(_) => CipherSuite::Aes256Gcm,
            AeadImpl::ChaCha(_) => CipherSuite::Chacha20Poly1305,
        }
    }

    /// AEAD seal (encrypt) plaintext with nonce and AAD.
    /// Empty plaintext is allowed: the result is a bare tag.
    pub fn seal(
        &self,
        nonce_12: &[u8],
        aad: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if nonce_12.len() != NONCE_LEN_12 {
            return Err(CryptoError::InvalidNonceLen {
                expected: NONCE_LEN_12,
                actual: nonce_12.len(),
            });
        }

        match self {
            AeadImpl::AesGcm(cipher) => {
                cipher
                    .encrypt(AesNonce::from_slice(nonce_12), Payload { msg: plaintext, aad })
                    .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
            }
            AeadImpl::ChaCha(cipher) => {
                cipher
                    .encrypt(ChaNonce::from_slice(nonce_12), Payload { msg: plaintext, aad })
                    .map_err(|_| CryptoError::Failure("ChaCha20-Poly1305 seal failed".into()))
            }
        }
    }

    /// AEAD open (decrypt) ciphertext with nonce and AAD.
    pub fn open(
        &self,
        nonce_12: &[u8],
        aad: &[u8],
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        if nonce_12.len() != NONCE_LEN_12 {
            return Err(CryptoError::InvalidNonceLen {
                expected: NONCE_LEN_12,
                actual: nonce_12.len(),
            });
        }

        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::Format("ciphertext too short".into()));
        }

        match self {
            AeadImpl::AesGcm(cipher) => {
                cipher
                    .decrypt(AesNonce::from_slice(nonce_12), Payload { msg: ciphertext_and_tag, aad })
                    .map_err(|_| CryptoError::TagMismatch)
            }
            AeadImpl::ChaCha(cipher) => {
                cipher
                    .decrypt(ChaNonce::from_slice(nonce_12), Payload { msg: ciphertext_and_tag, aad })
                    .map_err(|_| CryptoError::TagMismatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_key() {
        let err = AeadImpl::new(CipherSuite::Aes256Gcm, &[7u8; 16]).err().unwrap();
        assert!(matches!(err, CryptoError::InvalidKeyLen { expected: 32, actual: 16 }));
    }

    #[test]
    fn empty_plaintext_seals_to_bare_tag() {
        let aead = AeadImpl::new(CipherSuite::Chacha20Poly1305, &[1u8; 32]).unwrap();
        let ct = aead.seal(&[0u8; 12], b"ad", b"").unwrap();
        assert_eq!(ct.len(), TAG_LEN);
        assert_eq!(aead.open(&[0u8; 12], b"ad", &ct).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn wrong_aad_fails_closed() {
        let aead = AeadImpl::new(CipherSuite::Aes256Gcm, &[2u8; 32]).unwrap();
        let ct = aead.seal(&[3u8; 12], b"one", b"payload").unwrap();
        assert!(matches!(aead.open(&[3u8; 12], b"two", &ct), Err(CryptoError::TagMismatch)));
    }
}
