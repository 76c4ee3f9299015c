//! ledgerbase-core
//!
//! Header metadata tooling and key-rotating string encryption.
//! Pure Rust library; the `ledgerbase` binary is a thin shell over it.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod settings;

pub mod crypto;
pub mod headers;
pub mod scan;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{
        CipherSuite, ConfigurationError, CryptoError, DecryptionError, EncryptionConfig, Encryptor,
        RotateError, SecretKey,
    };
    pub use crate::headers::{
        parse_header, parse_header_for, read_header, validate, FileMetadata, HeaderRecord, HeaderStyle, MetaValue,
    };
    pub use crate::scan::{run, FileStatus, ScanConfig, ScanReport, ValidationMode};
    pub use crate::settings::{AppConfig, LogFormat};
}
