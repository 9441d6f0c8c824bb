//! Encrypted-at-rest JSON document store
//!
//! Documents are serialized to JSON, wrapped in a single authenticated token
//! (see [`exitpass_common::crypto`]) and written atomically. Reads never
//! fail: a missing, empty, undecryptable or unparsable file yields a
//! [`StoreLoad`] variant that degrades to an empty document, and the cause
//! is logged. Writes report every failure to the caller.

mod atomic;
mod load;

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use exitpass_common::crypto::{DataKey, EncryptionService};
use exitpass_domain::constants::{BACKUP_SUFFIX, ENCRYPTED_BACKUP_SUFFIX};
use exitpass_domain::{ExitPassError, Result};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use self::atomic::sibling_with_suffix;
pub use self::load::{StoreLoad, UnavailableReason};
use crate::errors::InfraError;

/// Reads and writes encrypted JSON documents with one process-wide key.
pub struct SecureStore {
    cipher: EncryptionService,
    backup_on_save: bool,
    write_locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl std::fmt::Debug for SecureStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStore")
            .field("key_fingerprint", &self.cipher.key_fingerprint())
            .field("backup_on_save", &self.backup_on_save)
            .finish_non_exhaustive()
    }
}

impl SecureStore {
    pub fn new(key: &DataKey) -> Result<Self> {
        let cipher = EncryptionService::new(key).map_err(InfraError::from)?;
        Ok(Self { cipher, backup_on_save: true, write_locks: Mutex::new(HashMap::new()) })
    }

    /// Toggle `<file>.bak` rotation on save.
    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.backup_on_save = enabled;
        self
    }

    pub fn key_fingerprint(&self) -> &str {
        self.cipher.key_fingerprint()
    }

    /// Read and decrypt a document.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StoreLoad<T> {
        let path = path.as_ref();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("document not found, starting empty");
                return StoreLoad::Missing;
            }
            Err(e) => return unavailable(UnavailableReason::Read, e),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            warn!("document file is empty");
            return StoreLoad::Empty;
        }

        let plaintext = match self.cipher.decrypt_token_bytes(&bytes) {
            Ok(plaintext) => plaintext,
            Err(e) => return unavailable(UnavailableReason::Decrypt, e),
        };

        match serde_json::from_slice(&plaintext) {
            Ok(document) => {
                debug!(bytes = bytes.len(), "document loaded");
                StoreLoad::Loaded(document)
            }
            Err(e) => unavailable(UnavailableReason::Parse, e),
        }
    }

    /// Encrypt and atomically write a document.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save<T: Serialize>(&self, path: impl AsRef<Path>, document: &T) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec(document).map_err(InfraError::from)?;
        self.write_token(path, &json, self.backup_on_save.then_some(BACKUP_SUFFIX))
    }

    /// Encrypt a plaintext JSON file in place.
    ///
    /// The plaintext is copied to `<file>.bak` during the swap and deleted
    /// once the written token decrypts back to the same bytes. If that check
    /// fails the copy stays and a warning names it.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn encrypt_plain_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let plaintext = fs::read(path).map_err(InfraError::from)?;
        serde_json::from_slice::<serde_json::Value>(&plaintext).map_err(InfraError::from)?;

        self.write_token(path, &plaintext, Some(BACKUP_SUFFIX))?;

        let backup = sibling_with_suffix(path, BACKUP_SUFFIX);
        let verified = fs::read(path)
            .ok()
            .and_then(|token| self.cipher.decrypt_token_bytes(&token).ok())
            .is_some_and(|decrypted| decrypted == plaintext);
        if !verified {
            warn!(
                backup = %backup.display(),
                "encrypted document did not read back, plaintext copy kept"
            );
            return Ok(());
        }
        if let Err(e) = fs::remove_file(&backup) {
            warn!(backup = %backup.display(), error = %e, "failed to remove plaintext copy");
            return Ok(());
        }

        info!("plaintext document encrypted");
        Ok(())
    }

    /// Decrypt a document in place to pretty JSON, keeping the ciphertext as
    /// `<file>.enc.bak`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn decrypt_to_plain_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(InfraError::from)?;
        let plaintext = self.cipher.decrypt_token_bytes(&bytes).map_err(InfraError::from)?;
        let value: serde_json::Value =
            serde_json::from_slice(&plaintext).map_err(InfraError::from)?;
        let pretty = serde_json::to_vec_pretty(&value).map_err(InfraError::from)?;

        let lock = self.lock_for(path);
        let _guard = lock.lock();
        let backup = sibling_with_suffix(path, ENCRYPTED_BACKUP_SUFFIX);
        atomic::write_atomic(path, &pretty, Some(&backup)).map_err(|e| {
            error!(error = %e, "failed to write decrypted document");
            ExitPassError::from(InfraError::from(e))
        })?;

        warn!(backup = %backup.display(), "document decrypted to plaintext on disk");
        Ok(())
    }

    fn write_token(
        &self,
        path: &Path,
        plaintext: &[u8],
        backup_suffix: Option<&str>,
    ) -> Result<()> {
        let token = self.cipher.encrypt_token(plaintext).map_err(|e| {
            error!(error = %e, "failed to encrypt document");
            ExitPassError::from(InfraError::from(e))
        })?;

        let lock = self.lock_for(path);
        let _guard = lock.lock();

        let backup = backup_suffix.map(|suffix| sibling_with_suffix(path, suffix));
        atomic::write_atomic(path, token.as_bytes(), backup.as_deref()).map_err(|e| {
            error!(error = %e, "failed to write encrypted document");
            ExitPassError::from(InfraError::from(e))
        })?;

        debug!(bytes = token.len(), backup = backup.is_some(), "encrypted document written");
        Ok(())
    }

    /// Writer lock for one path; writers to different paths do not contend.
    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.write_locks.lock();
        Arc::clone(locks.entry(path.to_path_buf()).or_default())
    }
}

fn unavailable<T>(reason: UnavailableReason, cause: impl std::fmt::Display) -> StoreLoad<T> {
    let detail = cause.to_string();
    error!(reason = %reason, error = %detail, "document unavailable, continuing with empty data");
    StoreLoad::Unavailable { reason, detail }
}
