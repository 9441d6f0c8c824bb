//! Timetable persistence and publication

use std::path::{Path, PathBuf};
use std::sync::Arc;

use exitpass_core::{TimetableHandle, TimetableIndex};
use exitpass_domain::{Result, TimetableDocument};
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::secure_store::{SecureStore, StoreLoad};

/// Loads the encrypted timetable and publishes it into a [`TimetableHandle`].
///
/// Reload and re-upload each hold `publish` from the disk access until the
/// snapshot is swapped, so the live index always matches the last file
/// written.
#[derive(Debug)]
pub struct TimetableRepository {
    store: Arc<SecureStore>,
    path: PathBuf,
    handle: Arc<TimetableHandle>,
    publish: Mutex<()>,
}

impl TimetableRepository {
    pub fn new(
        store: Arc<SecureStore>,
        path: impl Into<PathBuf>,
        handle: Arc<TimetableHandle>,
    ) -> Self {
        Self { store, path: path.into(), handle, publish: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn handle(&self) -> &Arc<TimetableHandle> {
        &self.handle
    }

    /// Read the document without publishing it.
    pub fn load(&self) -> StoreLoad<TimetableDocument> {
        self.store.load(&self.path)
    }

    /// Re-read the file and swap the live snapshot.
    ///
    /// An unreadable timetable is published as an empty index, so lookups
    /// find no teacher instead of failing. Returns the number of teachers
    /// now live.
    pub fn reload(&self) -> usize {
        let _publish = self.publish.lock();

        let loaded = self.load();
        let status = loaded.status();
        if loaded.is_unavailable() {
            warn!(
                path = %self.path.display(),
                "timetable unavailable, notifications disabled until next reload"
            );
        }

        let index = TimetableIndex::new(loaded.into_document());
        let teachers = index.teacher_count();
        self.handle.replace(index);
        info!(path = %self.path.display(), status, teachers, "timetable loaded");
        teachers
    }

    /// Persist a new timetable (e.g. after re-upload) and publish it.
    ///
    /// The live snapshot is only replaced once the write succeeded.
    pub fn replace(&self, document: TimetableDocument) -> Result<()> {
        let _publish = self.publish.lock();

        self.store.save(&self.path, &document)?;
        self.handle.replace(TimetableIndex::new(document));
        Ok(())
    }
}
