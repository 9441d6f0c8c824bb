//! Exit notification service - core business logic

use std::sync::Arc;

use exitpass_domain::{ExitEvent, NotificationPlan};
use tracing::{debug, info};

use super::dispatch::resolve_teachers;
use super::scope::resolve_scope;
use crate::calendar::SessionCalendar;
use crate::timetable::TimetableProvider;

/// Plans the teacher notifications for exit events.
///
/// Stateless across events: each call takes one timetable snapshot and
/// computes its own scope and notified set.
pub struct ExitNotificationService {
    calendar: Arc<SessionCalendar>,
    timetable: Arc<dyn TimetableProvider>,
}

impl ExitNotificationService {
    /// Create a new exit notification service
    pub fn new(calendar: Arc<SessionCalendar>, timetable: Arc<dyn TimetableProvider>) -> Self {
        Self { calendar, timetable }
    }

    pub fn calendar(&self) -> &SessionCalendar {
        &self.calendar
    }

    /// Resolve the current period, the affected periods and the teachers.
    pub fn plan(&self, event: &ExitEvent) -> NotificationPlan {
        let index = self.timetable.snapshot();
        let now = event.time();

        let current_period = self.calendar.resolve(now);
        match &current_period {
            Some(active) => {
                debug!(period = %active.name, index = active.index, "current period resolved")
            }
            None => info!(time = %now.format("%H:%M"), "exit registered outside school hours"),
        }

        let scope = resolve_scope(
            &self.calendar,
            now,
            event.returns,
            event.effective_return_selection(),
        );
        debug!(returns = event.returns, scope = ?scope, "notification scope resolved");

        let notices =
            resolve_teachers(&index, &self.calendar, &event.group, &scope, event.weekday());

        info!(
            ticket = %event.ticket_id(),
            group = %event.group,
            periods = scope.len(),
            teachers = notices.len(),
            "exit notifications planned"
        );

        NotificationPlan { current_period, scope, notices }
    }
}

impl std::fmt::Debug for ExitNotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExitNotificationService")
            .field("windows", &self.calendar.len())
            .field("teachers", &self.timetable.snapshot().teacher_count())
            .finish()
    }
}
