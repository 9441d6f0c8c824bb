//! Read-only timetable index

use chrono::Weekday;
use exitpass_domain::{ClassInfo, ScheduleRow, SchoolDay, TimetableDocument, TimetableEntry};
use tracing::trace;

use super::matching::group_matches;
use crate::calendar::SessionCalendar;

/// Immutable view over a loaded timetable document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimetableIndex {
    entries: Vec<TimetableEntry>,
}

impl TimetableIndex {
    pub fn new(entries: TimetableDocument) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn teacher_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Teacher with `group` during `period` on `weekday`.
    ///
    /// Slots are selected when their period text contains `period`, so
    /// `"Sesión 1"` also selects slots labelled `"Sesión 10"`..`"Sesión 14"`.
    /// The first teacher in document order wins. Weekends and empty
    /// arguments always yield `None`.
    pub fn find_teacher(
        &self,
        group: &str,
        period: &str,
        weekday: Weekday,
    ) -> Option<&TimetableEntry> {
        let day = SchoolDay::from_weekday(weekday)?;
        self.find_class(group, period, day).map(|(teacher, _)| teacher)
    }

    /// The group's whole day, one row per calendar window.
    ///
    /// Empty on weekends.
    pub fn group_day_schedule(
        &self,
        group: &str,
        weekday: Weekday,
        calendar: &SessionCalendar,
    ) -> Vec<ScheduleRow> {
        let Some(day) = SchoolDay::from_weekday(weekday) else {
            return Vec::new();
        };

        calendar
            .windows()
            .iter()
            .map(|window| {
                let period = window.name.clone();
                if window.is_break() {
                    return ScheduleRow::Break { period };
                }
                match self.find_class(group, &window.name, day) {
                    Some((teacher, class)) => ScheduleRow::Class {
                        period,
                        subject: non_empty_or(&class.subject, "---"),
                        room: non_empty_or(&class.room, "---"),
                        teacher: non_empty_or(&teacher.name, "Desconocido"),
                    },
                    None => ScheduleRow::Free { period },
                }
            })
            .collect()
    }

    fn find_class(
        &self,
        group: &str,
        period: &str,
        day: SchoolDay,
    ) -> Option<(&TimetableEntry, &ClassInfo)> {
        if group.is_empty() || period.is_empty() {
            return None;
        }

        let found = self.entries.iter().find_map(|teacher| {
            teacher
                .schedule
                .iter()
                .filter(|slot| slot.covers(period))
                .filter_map(|slot| slot.class_on(day))
                .find(|class| group_matches(group, &class.group))
                .map(|class| (teacher, class))
        });

        trace!(group, period, day = %day, found = found.is_some(), "timetable lookup");
        found
    }
}

impl From<TimetableDocument> for TimetableIndex {
    fn from(entries: TimetableDocument) -> Self {
        Self::new(entries)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
