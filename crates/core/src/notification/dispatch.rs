//! Teacher selection with per-event deduplication

use std::collections::HashSet;

use chrono::Weekday;
use exitpass_domain::TeacherNotice;
use tracing::debug;

use crate::calendar::SessionCalendar;
use crate::timetable::TimetableIndex;

/// Teachers to notify for `group` over `scope`, each email at most once.
///
/// Periods are visited in scope order; break periods are skipped. A teacher
/// covering several periods is reported against the first one. Periods with
/// no teacher, or a teacher without email, are skipped.
pub fn resolve_teachers<S: AsRef<str>>(
    index: &TimetableIndex,
    calendar: &SessionCalendar,
    group: &str,
    scope: &[S],
    weekday: Weekday,
) -> Vec<TeacherNotice> {
    let mut notified: HashSet<&str> = HashSet::new();
    let mut notices = Vec::new();

    for period in scope {
        let period = period.as_ref();
        if calendar.is_break(period) {
            continue;
        }

        let Some(teacher) = index.find_teacher(group, period, weekday) else {
            debug!(group, period, "no teacher found for period");
            continue;
        };

        let email = teacher.email.trim();
        if email.is_empty() {
            debug!(group, period, teacher = %teacher.name, "teacher has no email address");
            continue;
        }

        if !notified.insert(email) {
            debug!(period, email, "teacher already notified for this exit");
            continue;
        }

        debug!(period, teacher = %teacher.name, email, "teacher selected");
        notices.push(TeacherNotice {
            teacher_name: teacher.name.clone(),
            email: email.to_string(),
            period: period.to_string(),
        });
    }

    notices
}
