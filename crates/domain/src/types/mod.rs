//! Domain types and models

pub mod exit;
pub mod notice;
pub mod roster;
pub mod session;
pub mod timetable;

pub use exit::ExitEvent;
pub use notice::{NotificationPlan, OutgoingMessage, ScheduleRow, TeacherNotice};
pub use roster::{Guardian, PhoneNumber, RosterDocument, StudentRecord};
pub use session::{
    parse_hhmm, truncate_to_minute, ActivePeriod, SchoolDay, SessionKind, SessionWindow,
};
pub use timetable::{ClassInfo, GroupSpec, ScheduleSlot, TimetableDocument, TimetableEntry};
