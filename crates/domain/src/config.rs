//! Configuration management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_ROSTER_FILE, DEFAULT_SENDER_NAME, DEFAULT_TIMETABLE_FILE,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Encrypted document locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    /// Relative paths are resolved against the working directory.
    pub timetable_path: PathBuf,
    pub roster_path: PathBuf,
    /// Keep the previous ciphertext as `<file>.bak` on every save.
    #[serde(default = "default_backup_on_save")]
    pub backup_on_save: bool,
}

/// Mail envelope settings for outgoing notices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub sender_email: String,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    #[serde(default)]
    pub reply_to: Option<String>,
    /// On-duty staff who receive a summary of every exit.
    #[serde(default)]
    pub guardian_emails: Vec<String>,
}

impl NotificationConfig {
    /// Guardian addresses with blanks removed.
    pub fn valid_guardian_emails(&self) -> Vec<String> {
        self.guardian_emails
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn default_backup_on_save() -> bool {
    true
}

fn default_sender_name() -> String {
    DEFAULT_SENDER_NAME.to_string()
}

impl StorageConfig {
    /// Default file names under `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            timetable_path: data_dir.join(DEFAULT_TIMETABLE_FILE),
            roster_path: data_dir.join(DEFAULT_ROSTER_FILE),
            data_dir,
            backup_on_save: default_backup_on_save(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            sender_email: String::new(),
            sender_name: default_sender_name(),
            reply_to: None,
            guardian_emails: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_data_dir() {
        let config = Config::default();
        assert_eq!(config.storage.roster_path, PathBuf::from("data/students.json"));
        assert_eq!(
            config.storage.timetable_path,
            PathBuf::from("data/horarios_profesores_limpio.json")
        );
        assert!(config.storage.backup_on_save);
        assert_eq!(config.notifications.sender_name, "Partes de Salida");
    }

    #[test]
    fn blank_guardians_are_dropped() {
        let config = NotificationConfig {
            guardian_emails: vec![" a@school ".into(), "".into(), "  ".into()],
            ..NotificationConfig::default()
        };
        assert_eq!(config.valid_guardian_emails(), vec!["a@school".to_string()]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{"notifications": {"sender_email": "noreply@school"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.notifications.sender_email, "noreply@school");
        assert!(config.notifications.guardian_emails.is_empty());
        assert_eq!(config.storage, StorageConfig::default());
    }
}
