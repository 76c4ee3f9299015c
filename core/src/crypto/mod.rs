pub mod types;
pub mod aead;
pub mod nonce;
pub mod keys;
pub mod token;
pub mod encryptor;

pub use types::*;
pub use aead::*;
pub use nonce::*;
pub use keys::*;
pub use token::*;
pub use encryptor::*;
