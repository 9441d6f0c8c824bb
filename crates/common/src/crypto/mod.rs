//! Shared cryptographic primitives for data-at-rest protection.

pub mod encryption;
pub mod key;

pub use encryption::{EncryptionService, LEGACY_TOKEN_VERSION, TOKEN_VERSION};
pub use key::DataKey;
