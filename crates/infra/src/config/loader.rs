//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a `.env` file from the working directory, if present
//! 2. Attempts to load from environment variables (`EXITPASS_DATA_DIR` set)
//! 3. Otherwise probes multiple paths for config files (JSON or TOML)
//! 4. Otherwise uses the built-in defaults
//!
//! ## Environment Variables
//! - `EXITPASS_DATA_DIR`: Directory holding the encrypted documents (required
//!   for env loading)
//! - `EXITPASS_TIMETABLE_PATH`: Timetable document path
//! - `EXITPASS_ROSTER_PATH`: Student roster document path
//! - `EXITPASS_BACKUP_ON_SAVE`: Keep `<file>.bak` on save (true/false)
//! - `EXITPASS_SENDER_EMAIL`: Sender address for notices
//! - `EXITPASS_SENDER_NAME`: Sender display name
//! - `EXITPASS_REPLY_TO`: Reply-To address for teacher notices
//! - `EXITPASS_GUARDIAN_EMAILS`: Comma-separated on-duty staff addresses
//!
//! The data key (`STUDENTS_DATA_KEY`) is read separately by
//! [`KeyManager`](crate::key_manager::KeyManager).
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./exitpass.json` or `./exitpass.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use exitpass_domain::constants::{
    ENV_BACKUP_ON_SAVE, ENV_DATA_DIR, ENV_GUARDIAN_EMAILS, ENV_REPLY_TO, ENV_ROSTER_PATH,
    ENV_SENDER_EMAIL, ENV_SENDER_NAME, ENV_TIMETABLE_PATH,
};
use exitpass_domain::{Config, ExitPassError, NotificationConfig, Result, StorageConfig};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ExitPassError::Config` if an environment value or a found
/// config file is invalid.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    if std::env::var_os(ENV_DATA_DIR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No configuration found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `EXITPASS_DATA_DIR` is required; document paths default to files inside
/// it.
///
/// # Errors
/// Returns `ExitPassError::Config` if the data directory is missing.
pub fn load_from_env() -> Result<Config> {
    let data_dir = PathBuf::from(env_var(ENV_DATA_DIR)?);
    let defaults = StorageConfig::in_dir(&data_dir);

    let storage = StorageConfig {
        timetable_path: env_path(ENV_TIMETABLE_PATH).unwrap_or(defaults.timetable_path),
        roster_path: env_path(ENV_ROSTER_PATH).unwrap_or(defaults.roster_path),
        backup_on_save: env_bool(ENV_BACKUP_ON_SAVE, defaults.backup_on_save),
        data_dir,
    };

    let defaults = NotificationConfig::default();
    let notifications = NotificationConfig {
        sender_email: std::env::var(ENV_SENDER_EMAIL).unwrap_or_default(),
        sender_name: std::env::var(ENV_SENDER_NAME).unwrap_or(defaults.sender_name),
        reply_to: std::env::var(ENV_REPLY_TO).ok().filter(|s| !s.trim().is_empty()),
        guardian_emails: std::env::var(ENV_GUARDIAN_EMAILS)
            .map(|raw| split_list(&raw))
            .unwrap_or_default(),
    };

    Ok(Config { storage, notifications })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ExitPassError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ExitPassError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ExitPassError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ExitPassError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ExitPassError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ExitPassError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ExitPassError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 6] = [
        "config.json",
        "config.toml",
        "exitpass.json",
        "exitpass.toml",
        "../config.json",
        "../config.toml",
    ];

    let mut bases = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        bases.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        bases.push(exe_dir);
    }

    bases
        .iter()
        .flat_map(|base| NAMES.iter().map(move |name| base.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ExitPassError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

/// Split a comma-separated list, dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}
