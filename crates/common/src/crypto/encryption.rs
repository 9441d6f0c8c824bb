//! Authenticated token encryption for documents at rest.
//!
//! A token is a single URL-safe base64 string wrapping:
//!
//! ```text
//! +---------+------------------+-----------+---------------------------+
//! | version | timestamp (u64)  | nonce     | AES-256-GCM ciphertext    |
//! | 1 byte  | 8 bytes, BE      | 12 bytes  | plaintext length + 16 tag |
//! +---------+------------------+-----------+---------------------------+
//! ```
//!
//! The version byte and timestamp are bound to the ciphertext as associated
//! data, so tampering with any part of the token fails authentication.
//!
//! Files written by the previous deployment hold Fernet tokens (version
//! `0x80`, AES-128-CBC with HMAC-SHA256) under the same 32-byte key. Those
//! are still read; every write produces a `0x81` token, so a legacy file is
//! upgraded the next time it is saved.
//!
//! ## Usage
//!
//! ```rust
//! use exitpass_common::crypto::{DataKey, EncryptionService};
//!
//! let service = EncryptionService::new(&DataKey::generate())?;
//! let token = service.encrypt_token(b"[]")?;
//! assert_eq!(service.decrypt_token(&token)?, b"[]");
//! # Ok::<(), exitpass_common::error::CommonError>(())
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use fernet::Fernet;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use super::key::DataKey;
use crate::error::{CommonError, CommonResult};

/// Version byte written at the start of every token.
pub const TOKEN_VERSION: u8 = 0x81;

/// Version byte of Fernet tokens, accepted on read only.
pub const LEGACY_TOKEN_VERSION: u8 = 0x80;

const TIMESTAMP_LEN: usize = 8;
const HEADER_LEN: usize = 1 + TIMESTAMP_LEN;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const MIN_TOKEN_LEN: usize = HEADER_LEN + NONCE_LEN + TAG_LEN;

/// URL-safe base64 that writes padding and accepts input with or without it.
pub(crate) const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// AES-256-GCM token encryption bound to one process-wide key.
pub struct EncryptionService {
    cipher: Aes256Gcm,
    legacy: Fernet,
    fingerprint: String,
}

impl std::fmt::Debug for EncryptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionService")
            .field("cipher", &"AES-256-GCM")
            .field("legacy", &"Fernet")
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl EncryptionService {
    /// Create a new encryption service from a data key.
    pub fn new(key: &DataKey) -> CommonResult<Self> {
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|e| {
            CommonError::encryption_op("init", format!("failed to create cipher: {e}"))
        })?;

        let mut encoded = key.to_base64();
        let legacy = Fernet::new(&encoded);
        encoded.zeroize();
        let legacy = legacy.ok_or_else(|| {
            CommonError::encryption_op("init", "key rejected by the legacy token reader")
        })?;

        Ok(Self { cipher, legacy, fingerprint: key.fingerprint() })
    }

    /// Encrypt bytes into a token stamped with the current time.
    pub fn encrypt_token(&self, plaintext: &[u8]) -> CommonResult<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.encrypt_token_at(plaintext, timestamp)
    }

    /// Encrypt bytes into a token stamped with an explicit timestamp.
    pub fn encrypt_token_at(&self, plaintext: &[u8], timestamp: u64) -> CommonResult<String> {
        let mut header = [0u8; HEADER_LEN];
        header[0] = TOKEN_VERSION;
        header[1..].copy_from_slice(&timestamp.to_be_bytes());

        let nonce_bytes = Self::generate_nonce();
        let ciphertext = self
            .cipher
            .encrypt(&Nonce::from(nonce_bytes), Payload { msg: plaintext, aad: &header })
            .map_err(|e| CommonError::encryption_op("encrypt", e.to_string()))?;

        let mut raw = Vec::with_capacity(HEADER_LEN + NONCE_LEN + ciphertext.len());
        raw.extend_from_slice(&header);
        raw.extend_from_slice(&nonce_bytes);
        raw.extend_from_slice(&ciphertext);

        Ok(URL_SAFE_LENIENT.encode(raw))
    }

    /// Verify and decrypt a token.
    ///
    /// Any failure (bad encoding, unknown version, truncated payload, wrong
    /// key, tampered bytes) is reported as an encryption error.
    pub fn decrypt_token(&self, token: &str) -> CommonResult<Vec<u8>> {
        let raw = decode_token(token)?;
        match raw[0] {
            TOKEN_VERSION => self.decrypt_current(&raw),
            LEGACY_TOKEN_VERSION => self.decrypt_legacy(&raw),
            other => Err(CommonError::encryption_op(
                "decode",
                format!("unsupported token version 0x{other:02x}"),
            )),
        }
    }

    /// Decrypt a token read as raw file bytes.
    pub fn decrypt_token_bytes(&self, bytes: &[u8]) -> CommonResult<Vec<u8>> {
        let token = std::str::from_utf8(bytes)
            .map_err(|_| CommonError::encryption_op("decrypt", "token is not valid UTF-8"))?;
        self.decrypt_token(token)
    }

    /// Short fingerprint of the key in use.
    pub fn key_fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn decrypt_current(&self, raw: &[u8]) -> CommonResult<Vec<u8>> {
        if raw.len() < MIN_TOKEN_LEN {
            return Err(CommonError::encryption_op(
                "decode",
                format!("token too short ({} bytes)", raw.len()),
            ));
        }

        let (header, body) = raw.split_at(HEADER_LEN);
        let (nonce, ciphertext) = body.split_at(NONCE_LEN);
        let nonce_array: [u8; NONCE_LEN] = nonce.try_into().map_err(|_| {
            CommonError::encryption_op("decrypt", "nonce must be exactly 12 bytes")
        })?;

        self.cipher
            .decrypt(&Nonce::from(nonce_array), Payload { msg: ciphertext, aad: header })
            .map_err(|_| {
                CommonError::encryption_op(
                    "decrypt",
                    "authentication failed (wrong key or corrupted token)",
                )
            })
    }

    /// Fernet expects its own padded text form, so re-encode the raw bytes.
    fn decrypt_legacy(&self, raw: &[u8]) -> CommonResult<Vec<u8>> {
        self.legacy.decrypt(&URL_SAFE_LENIENT.encode(raw)).map_err(|_| {
            CommonError::encryption_op(
                "decrypt",
                "legacy token failed authentication (wrong key or corrupted token)",
            )
        })
    }

    fn generate_nonce() -> [u8; NONCE_LEN] {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        nonce
    }
}

fn decode_token(token: &str) -> CommonResult<Vec<u8>> {
    let raw = URL_SAFE_LENIENT.decode(token.trim()).map_err(|e| {
        CommonError::encryption_op("decode", format!("invalid token encoding: {e}"))
    })?;

    if raw.is_empty() {
        return Err(CommonError::encryption_op("decode", "token is empty"));
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    //! Unit tests for crypto::encryption.
    use super::*;

    fn service() -> EncryptionService {
        EncryptionService::new(&DataKey::generate()).unwrap()
    }

    /// Validates the encrypt/decrypt round trip for a JSON document.
    #[test]
    fn encrypt_and_decrypt_round_trip() {
        let service = service();
        let plaintext = br#"[{"nombre":"Ana"}]"#;

        let token = service.encrypt_token(plaintext).unwrap();
        let decrypted = service.decrypt_token(&token).unwrap();

        assert_eq!(decrypted, plaintext);
    }

    /// Validates that two encryptions of the same data differ (fresh nonce).
    #[test]
    fn tokens_use_fresh_nonces() {
        let service = service();
        let a = service.encrypt_token_at(b"same", 1).unwrap();
        let b = service.encrypt_token_at(b"same", 1).unwrap();
        assert_ne!(a, b);
    }

    /// Validates that the token is URL-safe text.
    #[test]
    fn token_uses_url_safe_alphabet() {
        let token = service().encrypt_token(&[0xff; 64]).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '='));
    }

    /// Validates that a different key cannot decrypt the token.
    #[test]
    fn wrong_key_fails_authentication() {
        let token = service().encrypt_token(b"secret").unwrap();
        let err = service().decrypt_token(&token).unwrap_err();
        assert!(matches!(err, CommonError::Encryption { .. }));
    }

    /// Validates that tampering with the timestamp breaks authentication.
    #[test]
    fn tampered_header_fails_authentication() {
        let service = service();
        let token = service.encrypt_token_at(b"payload", 1_700_000_000).unwrap();

        let mut raw = URL_SAFE_LENIENT.decode(&token).unwrap();
        raw[5] ^= 0x01;
        let forged = URL_SAFE_LENIENT.encode(raw);

        assert!(service.decrypt_token(&forged).is_err());
    }

    /// Validates rejection of truncated and foreign tokens.
    #[test]
    fn malformed_tokens_are_rejected() {
        let service = service();
        assert!(service.decrypt_token("").is_err());
        assert!(service.decrypt_token("AAAA").is_err());
        assert!(service.decrypt_token("%%%").is_err());

        for version in [LEGACY_TOKEN_VERSION, 0x7f] {
            let mut raw = vec![version];
            raw.extend_from_slice(&[0u8; 96]);
            assert!(service.decrypt_token(&URL_SAFE_LENIENT.encode(raw)).is_err());
        }
    }

    /// Validates reading a Fernet token from the published Fernet test vectors.
    #[test]
    fn legacy_fernet_token_decrypts_with_same_key() {
        let key = DataKey::from_base64("cw_0x689RpI-jtRR7oE8h_eQsKImvJapLeSbXpwF4e4=").unwrap();
        let service = EncryptionService::new(&key).unwrap();
        let token = concat!(
            "gAAAAAAdwJ6wAAECAwQFBgcICQoLDA0ODy021cpGVWKZ_eEwCGM4BLLF_5CV9dOPm",
            "rhuVUPgJobwOz7JcbmrR64jVmpU4IwqDA==",
        );

        assert_eq!(service.decrypt_token(token).unwrap(), b"hello");
        assert_eq!(service.decrypt_token(token.trim_end_matches('=')).unwrap(), b"hello");
        assert!(self::service().decrypt_token(token).is_err());
    }

    /// Validates that the header timestamp is what authentication covers.
    #[test]
    fn header_carries_the_requested_timestamp() {
        let token = service().encrypt_token_at(b"x", 1_717_171_717).unwrap();
        let raw = URL_SAFE_LENIENT.decode(&token).unwrap();
        assert_eq!(raw[0], TOKEN_VERSION);
        assert_eq!(raw[1..HEADER_LEN], 1_717_171_717u64.to_be_bytes());
    }

    /// Validates decryption from raw file bytes with a trailing newline.
    #[test]
    fn decrypt_token_bytes_accepts_trailing_newline() {
        let service = service();
        let mut bytes = service.encrypt_token(b"[]").unwrap().into_bytes();
        bytes.push(b'\n');
        assert_eq!(service.decrypt_token_bytes(&bytes).unwrap(), b"[]");
        assert!(service.decrypt_token_bytes(&[0xff, 0xfe]).is_err());
    }
}
