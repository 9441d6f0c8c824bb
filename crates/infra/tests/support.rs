//! Shared helpers for `exitpass-infra` integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use exitpass_common::DataKey;
use exitpass_domain::{Config, StorageConfig};
use exitpass_infra::SecureStore;
use tempfile::TempDir;

/// Plain timetable export as the scheduling tool writes it.
pub const TIMETABLE_EXPORT: &str = r#"[
  {
    "id": 7,
    "nombre": "Marta García",
    "email": "marta@school.example",
    "horario": [
      { "tramo": "Sesión 1", "Lunes": { "grupo": "E_1A", "materia": "MAT", "aula": "B12" } },
      { "tramo": "Sesión 2", "Lunes": { "grupo": ["1A", "1B"], "materia": "MAT", "aula": "B12" } },
      { "tramo": "Sesión 3", "Lunes": { "grupo": "1A", "materia": "MAT", "aula": "B12" } }
    ]
  },
  {
    "id": "8",
    "nombre": "Luis Romero",
    "email": "",
    "horario": [
      { "tramo": "Sesión 4", "Lunes": { "grupo": "1A", "materia": "LEN", "aula": "A3" } }
    ]
  }
]"#;

/// Temporary data directory with its own key, removed on drop.
pub struct TestDataDir {
    pub key: DataKey,
    dir: TempDir,
}

impl TestDataDir {
    pub fn new() -> Self {
        Self {
            key: DataKey::generate(),
            dir: tempfile::tempdir().expect("temp dir should be created"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn store(&self) -> Arc<SecureStore> {
        Arc::new(SecureStore::new(&self.key).expect("store should be created"))
    }

    pub fn config(&self) -> Config {
        Config { storage: StorageConfig::in_dir(self.path()), ..Config::default() }
    }
}

/// Monday 4 March 2024 at `h:m`.
pub fn monday_at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(h, m, 0).unwrap()
}
