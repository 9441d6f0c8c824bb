//! Teacher timetable lookups

pub mod handle;
pub mod index;
pub mod matching;
pub mod ports;

pub use handle::TimetableHandle;
pub use index::TimetableIndex;
pub use matching::group_matches;
pub use ports::TimetableProvider;
