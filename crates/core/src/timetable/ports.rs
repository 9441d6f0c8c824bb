//! Timetable ports

use std::sync::Arc;

use super::index::TimetableIndex;

/// Source of the current timetable snapshot.
///
/// Implementations must hand out a complete index; callers hold the
/// returned `Arc` for the duration of one exit event.
pub trait TimetableProvider: Send + Sync {
    fn snapshot(&self) -> Arc<TimetableIndex>;
}

impl TimetableProvider for Arc<TimetableIndex> {
    fn snapshot(&self) -> Arc<TimetableIndex> {
        Arc::clone(self)
    }
}
