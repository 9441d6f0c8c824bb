//! Application context - wires the store, repositories and core services

use std::fs;
use std::sync::Arc;

use chrono::Weekday;
use exitpass_common::DataKey;
use exitpass_core::{
    ExitNotificationService, NoticeTemplates, SessionCalendar, TimetableHandle, TimetableProvider,
};
use exitpass_domain::{Config, ExitEvent, NotificationPlan, OutgoingMessage, Result, ScheduleRow};
use tracing::{error, info};

use crate::errors::InfraError;
use crate::key_manager::KeyManager;
use crate::repositories::{RosterRepository, TimetableRepository};
use crate::secure_store::SecureStore;

/// Everything an exit-logging front end needs, built once at startup.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<SecureStore>,
    pub calendar: Arc<SessionCalendar>,
    pub timetable: TimetableRepository,
    pub roster: RosterRepository,
    pub notifications: ExitNotificationService,
    pub templates: NoticeTemplates,
}

impl AppContext {
    /// Build from `.env`, environment and config files.
    ///
    /// # Errors
    /// A missing or malformed data key is fatal, as is an invalid config.
    pub fn from_env() -> Result<Self> {
        let config = crate::config::load()?;
        let key = KeyManager::from_env().inspect_err(|err| {
            error!(error = %err, "data key unavailable, refusing to start");
        })?;
        Self::new(config, &key)
    }

    /// Build from an explicit config and key and load the timetable.
    pub fn new(config: Config, key: &DataKey) -> Result<Self> {
        fs::create_dir_all(&config.storage.data_dir).map_err(InfraError::from)?;

        let store = Arc::new(SecureStore::new(key)?.with_backups(config.storage.backup_on_save));
        let calendar = Arc::new(SessionCalendar::school_day()?);
        let handle = Arc::new(TimetableHandle::empty());

        let timetable = TimetableRepository::new(
            Arc::clone(&store),
            &config.storage.timetable_path,
            Arc::clone(&handle),
        );
        let roster = RosterRepository::new(Arc::clone(&store), &config.storage.roster_path);

        let provider: Arc<dyn TimetableProvider> = handle;
        let notifications = ExitNotificationService::new(Arc::clone(&calendar), provider);
        let templates = NoticeTemplates::new(config.notifications.clone());

        let teachers = timetable.reload();
        info!(
            data_dir = %config.storage.data_dir.display(),
            key = %store.key_fingerprint(),
            teachers,
            "exitpass context ready"
        );

        Ok(Self { config, store, calendar, timetable, roster, notifications, templates })
    }

    /// Plan an exit and render every message it triggers.
    pub fn prepare_exit(&self, event: &ExitEvent) -> (NotificationPlan, Vec<OutgoingMessage>) {
        let plan = self.notifications.plan(event);
        let messages = self.templates.render_all(event, &plan);
        (plan, messages)
    }

    /// Log a group's full day, one line per session, for operators.
    pub fn log_group_schedule(&self, group: &str, weekday: Weekday) -> Vec<ScheduleRow> {
        let rows =
            self.timetable.handle().snapshot().group_day_schedule(group, weekday, &self.calendar);
        info!(group, weekday = %weekday, sessions = rows.len(), "group schedule");
        for row in &rows {
            info!(group, "{row}");
        }
        rows
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("timetable", &self.timetable.path())
            .field("roster", &self.roster.path())
            .finish_non_exhaustive()
    }
}
