//! # Exitpass Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The school day calendar (time of day -> period)
//! - The timetable index (group + period + weekday -> teacher)
//! - Notification scope resolution and teacher deduplication
//! - The exit notification service and message templates
//!
//! ## Architecture Principles
//! - Only depends on `exitpass-domain`
//! - No filesystem, network or crypto code
//! - Timetable snapshots are supplied through the [`TimetableProvider`] port
//! - Pure, synchronous, deterministic given its inputs

pub mod calendar;
pub mod notification;
pub mod timetable;

pub use calendar::SessionCalendar;
pub use notification::dispatch::resolve_teachers;
pub use notification::scope::{label_to_period, parse_return_selection, resolve_scope};
pub use notification::service::ExitNotificationService;
pub use notification::templates::NoticeTemplates;
pub use timetable::handle::TimetableHandle;
pub use timetable::index::TimetableIndex;
pub use timetable::matching::group_matches;
pub use timetable::ports::TimetableProvider;
