use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use exitpass_core::{ExitNotificationService, SessionCalendar, TimetableHandle, TimetableIndex};
use exitpass_domain::{ClassInfo, GroupSpec, ScheduleSlot, SchoolDay, TimetableEntry};

/// Monday 4 March 2024 at `h:m`.
pub fn monday_at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(h, m, 0).unwrap()
}

/// Saturday 9 March 2024 at `h:m`.
pub fn saturday_at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn class(group: impl Into<GroupSpec>, subject: &str, room: &str) -> ClassInfo {
    ClassInfo { group: group.into(), subject: subject.into(), room: room.into() }
}

/// Builder for a teacher teaching the same group on Mondays.
pub fn monday_teacher(
    id: &str,
    name: &str,
    email: &str,
    periods: &[(&str, &str)],
) -> TimetableEntry {
    periods.iter().fold(TimetableEntry::new(id, name, email), |teacher, (period, group)| {
        teacher.with_slot(
            ScheduleSlot::new(*period).with_class(SchoolDay::Monday, class(*group, "MAT", "B12")),
        )
    })
}

/// Group `1A` on Monday:
/// - Sesión 1-2: Marta (`E_1A`)
/// - Sesión 3: Luis (list cell)
/// - Sesión 5: nobody
/// - Sesión 6: Marta again
/// - Sesión 7: Pilar, without email
pub fn school_timetable() -> TimetableIndex {
    let marta = monday_teacher(
        "1",
        "Marta García",
        "marta@school.example",
        &[("Sesión 1", "E_1A"), ("Sesión 2", "E_1A"), ("Sesión 6", "E_1A")],
    );
    let luis = TimetableEntry::new("2", "Luis Romero", "luis@school.example").with_slot(
        ScheduleSlot::new("Sesión 3").with_class(
            SchoolDay::Monday,
            class(GroupSpec::Multiple(vec!["1A".into(), "1B".into()]), "LEN", "A3"),
        ),
    );
    let pilar = monday_teacher("3", "Pilar Ruiz", "", &[("Sesión 7", "1A")]);
    let other = monday_teacher("4", "Otro", "otro@school.example", &[("Sesión 4", "2B")]);

    TimetableIndex::new(vec![marta, luis, pilar, other])
}

pub fn service_with(index: TimetableIndex) -> (ExitNotificationService, Arc<TimetableHandle>) {
    let calendar = Arc::new(SessionCalendar::school_day().unwrap());
    let handle = Arc::new(TimetableHandle::new(index));
    let service = ExitNotificationService::new(calendar, handle.clone());
    (service, handle)
}
