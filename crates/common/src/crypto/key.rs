//! Symmetric key material for the encrypted document store.
//!
//! Keys are 32 raw bytes, exchanged as URL-safe base64 text so they can be
//! carried in `.env` files and environment variables.

use std::fmt;

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encryption::URL_SAFE_LENIENT;
use crate::error::{CommonError, CommonResult};

/// Length of a data key in bytes.
pub const KEY_LEN: usize = 32;

/// 256-bit symmetric key that zeroes its memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DataKey {
    bytes: [u8; KEY_LEN],
}

impl DataKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Copy a key out of a slice, rejecting anything that is not 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> CommonResult<Self> {
        let array: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
            CommonError::validation_with_value(
                "data_key",
                format!("key must be exactly {KEY_LEN} bytes"),
                bytes.len().to_string(),
            )
        })?;
        Ok(Self { bytes: array })
    }

    /// Decode a URL-safe base64 key (padding optional, surrounding
    /// whitespace ignored).
    pub fn from_base64(encoded: &str) -> CommonResult<Self> {
        let trimmed = encoded.trim();
        if trimmed.is_empty() {
            return Err(CommonError::validation("data_key", "key is empty"));
        }

        let mut decoded = URL_SAFE_LENIENT.decode(trimmed).map_err(|e| {
            CommonError::validation("data_key", format!("key is not URL-safe base64: {e}"))
        })?;
        let key = Self::from_slice(&decoded);
        decoded.zeroize();
        key
    }

    /// Generate a fresh random key from the operating system RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Encode the key as padded URL-safe base64 (44 characters).
    pub fn to_base64(&self) -> String {
        URL_SAFE_LENIENT.encode(self.bytes)
    }

    /// Raw key bytes (use with caution).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// Short, non-reversible identifier for logs.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.bytes);
        URL_SAFE_LENIENT.encode(&digest[..8])
    }
}

impl fmt::Debug for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataKey")
            .field("bytes", &"[REDACTED]")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}
