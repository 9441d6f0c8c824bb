//! Encrypted document repositories

pub mod roster;
pub mod timetable;

pub use roster::RosterRepository;
pub use timetable::TimetableRepository;
