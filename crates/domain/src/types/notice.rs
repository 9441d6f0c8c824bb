//! Notification outputs handed to the mail collaborator

use serde::{Deserialize, Serialize};

use super::session::ActivePeriod;

/// A teacher to email about an exit, and the first period that selected them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherNotice {
    pub teacher_name: String,
    pub email: String,
    pub period: String,
}

/// Result of planning the notifications for one exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPlan {
    pub current_period: Option<ActivePeriod>,
    /// Affected period names in first-seen order.
    pub scope: Vec<String>,
    pub notices: Vec<TeacherNotice>,
}

impl NotificationPlan {
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn recipients(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.email.as_str()).collect()
    }
}

/// A rendered email, ready for transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: String,
}

/// What a group is doing during one window of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleRow {
    Break { period: String },
    Class { period: String, subject: String, room: String, teacher: String },
    Free { period: String },
}

impl ScheduleRow {
    pub fn period(&self) -> &str {
        match self {
            Self::Break { period } | Self::Class { period, .. } | Self::Free { period } => period,
        }
    }
}

impl std::fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Break { period } => write!(f, "{period:10} | [RECREO]"),
            Self::Class { period, subject, room, teacher } => {
                write!(f, "{period:10} | {subject:10} | Aula: {room:5} | Prof: {teacher}")
            }
            Self::Free { period } => write!(f, "{period:10} | Sin clase programada"),
        }
    }
}
