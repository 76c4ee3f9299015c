//! crypto/encryptor.rs
//! String encryption with ordered key rotation.
//!
//! Key 0 is the primary: it alone encrypts, and it is the first decrypt attempt.
//! Keys 1..N are secondaries kept so tokens minted under a retired primary stay
//! readable. Which key minted a token is not recorded; the AEAD tag decides.
//!
//! Key strings share the Fernet key shape, but tokens do not: a Fernet token
//! (version byte `0x80`, AES-CBC + HMAC) is rejected as `InvalidToken`. Values
//! stored by a Fernet deployment have to be decrypted there and encrypted again
//! here.

use tracing::debug;

use crate::crypto::aead::AeadImpl;
use crate::crypto::keys::SecretKey;
use crate::crypto::nonce::random_nonce_12;
use crate::crypto::token::{aad_for, TokenEnvelope};
use crate::crypto::types::{CipherSuite, ConfigurationError, CryptoError, DecryptionError, RotateError};

/// Explicit inputs for [`Encryptor::from_config`].
#[derive(Debug, Clone, Default)]
pub struct EncryptionConfig {
    /// Ordered key strings, primary first.
    pub secret_keys: Vec<String>,
    /// Suite used for new tokens.
    pub cipher: CipherSuite,
}

pub struct Encryptor {
    primary: SecretKey,
    secondary: Vec<SecretKey>,
    suite: CipherSuite,
}

impl Encryptor {
    /// Build from key strings with the default suite.
    pub fn new<S: AsRef<str>>(keys: &[S]) -> Result<Self, ConfigurationError> {
        Self::with_suite(keys, CipherSuite::default())
    }

    pub fn with_suite<S: AsRef<str>>(keys: &[S], suite: CipherSuite) -> Result<Self, ConfigurationError> {
        let mut parsed = keys
            .iter()
            .enumerate()
            .map(|(index, k)| {
                SecretKey::parse(k.as_ref()).map_err(|e| ConfigurationError::InvalidKey {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if parsed.is_empty() {
            return Err(ConfigurationError::MissingKeys);
        }
        let primary = parsed.remove(0);

        debug!(secondary_keys = parsed.len(), suite = %suite, "encryptor ready");
        Ok(Self { primary, secondary: parsed, suite })
    }

    pub fn from_config(cfg: &EncryptionConfig) -> Result<Self, ConfigurationError> {
        Self::with_suite(&cfg.secret_keys, cfg.cipher)
    }

    /// Primary plus secondaries.
    pub fn key_count(&self) -> usize {
        1 + self.secondary.len()
    }

    pub fn suite(&self) -> CipherSuite {
        self.suite
    }

    /// Encrypt under the primary key. No fallback.
    pub fn encrypt(&self, value: &str) -> Result<String, CryptoError> {
        let aead = AeadImpl::new(self.suite, self.primary.as_bytes())?;
        let nonce = random_nonce_12();
        let ciphertext = aead.seal(&nonce, &aad_for(self.suite), value.as_bytes())?;
        Ok(TokenEnvelope::new(self.suite, &nonce, ciphertext)?.encode())
    }

    /// Try the primary, then each secondary in order; first success wins.
    pub fn decrypt(&self, token: &str) -> Result<String, DecryptionError> {
        let envelope = TokenEnvelope::decode(token).map_err(|e| {
            debug!(error = %e, "token rejected before key attempts");
            DecryptionError::InvalidToken
        })?;

        for (index, key) in self.keys().enumerate() {
            let Ok(aead) = AeadImpl::new(envelope.suite, key.as_bytes()) else {
                continue;
            };
            match aead.open(&envelope.nonce, &envelope.aad(), &envelope.ciphertext) {
                Ok(plain) => {
                    if index > 0 {
                        debug!(key_index = index, "token opened with secondary key");
                    }
                    return String::from_utf8(plain).map_err(|_| DecryptionError::NotUtf8);
                }
                Err(e) => debug!(key_index = index, error = %e, "key rejected token"),
            }
        }

        Err(DecryptionError::InvalidToken)
    }

    /// Re-encrypt a token under the current primary key.
    pub fn rotate(&self, token: &str) -> Result<String, RotateError> {
        let plain = self.decrypt(token)?;
        Ok(self.encrypt(&plain)?)
    }

    fn keys(&self) -> impl Iterator<Item = &SecretKey> {
        std::iter::once(&self.primary).chain(self.secondary.iter())
    }
}

impl std::fmt::Debug for Encryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encryptor")
            .field("keys", &self.key_count())
            .field("suite", &self.suite)
            .finish()
    }
}
