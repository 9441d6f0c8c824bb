//! Swappable timetable snapshot

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use super::index::TimetableIndex;
use super::ports::TimetableProvider;

/// Shared owner of the live timetable.
///
/// Readers clone the inner `Arc` and keep working on that snapshot; a
/// reload swaps the pointer under the write lock, so every reader sees
/// either the old or the new index in full.
#[derive(Debug, Default)]
pub struct TimetableHandle {
    current: RwLock<Arc<TimetableIndex>>,
}

impl TimetableHandle {
    pub fn new(index: TimetableIndex) -> Self {
        Self { current: RwLock::new(Arc::new(index)) }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Install a new index and return the one it replaced.
    pub fn replace(&self, index: TimetableIndex) -> Arc<TimetableIndex> {
        let teachers = index.teacher_count();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(index));
        info!(
            teachers,
            previous_teachers = previous.teacher_count(),
            "timetable snapshot replaced"
        );
        previous
    }
}

impl TimetableProvider for TimetableHandle {
    fn snapshot(&self) -> Arc<TimetableIndex> {
        Arc::clone(&self.current.read())
    }
}
