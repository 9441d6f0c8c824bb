//! Student roster persistence

use std::path::{Path, PathBuf};
use std::sync::Arc;

use exitpass_domain::{Result, RosterDocument, StudentRecord};
use tracing::debug;

use crate::secure_store::{SecureStore, StoreLoad};

/// Encrypted student roster.
///
/// Every read goes to disk so an upload is visible immediately.
#[derive(Debug)]
pub struct RosterRepository {
    store: Arc<SecureStore>,
    path: PathBuf,
}

impl RosterRepository {
    pub fn new(store: Arc<SecureStore>, path: impl Into<PathBuf>) -> Self {
        Self { store, path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> StoreLoad<RosterDocument> {
        self.store.load(&self.path)
    }

    /// All students, or none when the roster cannot be read.
    pub fn all(&self) -> RosterDocument {
        self.load().into_document()
    }

    pub fn save_all(&self, students: &[StudentRecord]) -> Result<()> {
        self.store.save(&self.path, &students)?;
        debug!(students = students.len(), "roster saved");
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<StudentRecord> {
        self.all().into_iter().find(|s| s.id == id)
    }

    /// Students of a group, in roster order.
    pub fn find_by_group(&self, group: &str) -> Vec<StudentRecord> {
        self.all().into_iter().filter(|s| s.group == group).collect()
    }
}
