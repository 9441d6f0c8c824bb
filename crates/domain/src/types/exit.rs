//! Student exit events

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// A registered student exit, as handed over by the request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitEvent {
    pub timestamp: NaiveDateTime,
    pub student_id: String,
    pub student_name: String,
    pub group: String,
    #[serde(default)]
    pub motive: String,
    #[serde(default)]
    pub returns: bool,
    /// Return-hour labels (`"1ª"`, `"2ª"`, ...). Ignored unless `returns`.
    #[serde(default)]
    pub return_selection: Vec<String>,
}

impl ExitEvent {
    pub fn new(
        timestamp: NaiveDateTime,
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            student_id: student_id.into(),
            student_name: student_name.into(),
            group: group.into(),
            motive: String::new(),
            returns: false,
            return_selection: Vec::new(),
        }
    }

    pub fn with_motive(mut self, motive: impl Into<String>) -> Self {
        self.motive = motive.into();
        self
    }

    /// Mark the student as coming back for the given hours.
    pub fn returning<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.returns = true;
        self.return_selection = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// Return labels that actually apply to this exit.
    pub fn effective_return_selection(&self) -> &[String] {
        if self.returns {
            &self.return_selection
        } else {
            &[]
        }
    }

    /// Hours string as shown to guardians (`"1ª, 2ª"`).
    pub fn return_hours_display(&self) -> String {
        self.effective_return_selection().join(", ")
    }

    /// Identifier of the exit ticket: `YYYYMMDD_HHMMSS_<student id>`.
    pub fn ticket_id(&self) -> String {
        let student = if self.student_id.is_empty() { "unknown" } else { self.student_id.as_str() };
        format!("{}_{}", self.timestamp.format("%Y%m%d_%H%M%S"), student)
    }
}
