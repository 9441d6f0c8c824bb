//! Data key loading from the process environment
use exitpass_common::crypto::DataKey;
use exitpass_domain::constants::ENV_DATA_KEY;
use exitpass_domain::{ExitPassError, Result};
use tracing::info;

/// Loads the process-wide data key.
///
/// A missing or malformed key is a startup error: nothing stored can be read
/// or written without it.
pub struct KeyManager;

impl KeyManager {
    /// Read the key from `STUDENTS_DATA_KEY`.
    pub fn from_env() -> Result<DataKey> {
        Self::from_var(ENV_DATA_KEY)
    }

    /// Read the key from an arbitrary environment variable.
    pub fn from_var(name: &str) -> Result<DataKey> {
        let encoded = std::env::var(name).map_err(|_| {
            ExitPassError::Config(format!("Missing required environment variable: {name}"))
        })?;
        let key = Self::parse(&encoded)
            .map_err(|e| ExitPassError::Config(format!("{name} is not a valid data key: {e}")))?;
        info!(fingerprint = %key.fingerprint(), "data key loaded");
        Ok(key)
    }

    /// Decode a URL-safe base64 key string.
    pub fn parse(encoded: &str) -> Result<DataKey> {
        DataKey::from_base64(encoded).map_err(|e| ExitPassError::Config(e.to_string()))
    }

    /// Generate a new random key, URL-safe base64 encoded for `.env` files.
    pub fn generate_key() -> String {
        DataKey::generate().to_base64()
    }
}
