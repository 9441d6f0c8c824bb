//! Teacher timetable document
//!
//! Mirrors the school timetable export: one entry per teacher, each with a
//! list of period slots, each slot holding the class taught on each weekday.
//! Field names follow the export (`nombre`, `horario`, `tramo`, ...).

use serde::{Deserialize, Serialize};

use super::session::SchoolDay;
use crate::utils::lenient::{lenient_string, null_as_default};

/// Group code(s) a class is taught to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupSpec {
    Single(String),
    Multiple(Vec<String>),
}

impl GroupSpec {
    /// True when no group is recorded (empty string or empty list).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(code) => code.is_empty(),
            Self::Multiple(codes) => codes.is_empty(),
        }
    }

    /// Iterate every group code in the cell.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        let codes: &[String] = match self {
            Self::Single(code) => std::slice::from_ref(code),
            Self::Multiple(codes) => codes,
        };
        codes.iter().map(String::as_str)
    }
}

impl Default for GroupSpec {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<&str> for GroupSpec {
    fn from(code: &str) -> Self {
        Self::Single(code.to_string())
    }
}

/// The class a teacher gives in one slot on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    #[serde(rename = "grupo", default, deserialize_with = "null_as_default")]
    pub group: GroupSpec,
    #[serde(rename = "materia", default, deserialize_with = "lenient_string")]
    pub subject: String,
    #[serde(rename = "aula", default, deserialize_with = "lenient_string")]
    pub room: String,
}

/// One period row of a teacher's timetable.
///
/// `period` is free text from the export and may name more than one session
/// (e.g. `"Sesión 3 / Sesión 4"`); lookups match it by containment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(rename = "tramo", default, deserialize_with = "lenient_string")]
    pub period: String,
    #[serde(rename = "Lunes", default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<ClassInfo>,
    #[serde(rename = "Martes", default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<ClassInfo>,
    #[serde(
        rename = "Miércoles",
        alias = "Miercoles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wednesday: Option<ClassInfo>,
    #[serde(rename = "Jueves", default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<ClassInfo>,
    #[serde(rename = "Viernes", default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<ClassInfo>,
}

impl ScheduleSlot {
    pub fn new(period: impl Into<String>) -> Self {
        Self { period: period.into(), ..Self::default() }
    }

    /// Set the class for a day, builder style.
    pub fn with_class(mut self, day: SchoolDay, class: ClassInfo) -> Self {
        *self.day_mut(day) = Some(class);
        self
    }

    /// Class on `day`, treating an empty group as no class.
    pub fn class_on(&self, day: SchoolDay) -> Option<&ClassInfo> {
        let class = match day {
            SchoolDay::Monday => self.monday.as_ref(),
            SchoolDay::Tuesday => self.tuesday.as_ref(),
            SchoolDay::Wednesday => self.wednesday.as_ref(),
            SchoolDay::Thursday => self.thursday.as_ref(),
            SchoolDay::Friday => self.friday.as_ref(),
        };
        class.filter(|c| !c.group.is_empty())
    }

    /// True when the slot's period text mentions `period`.
    pub fn covers(&self, period: &str) -> bool {
        self.period.contains(period)
    }

    fn day_mut(&mut self, day: SchoolDay) -> &mut Option<ClassInfo> {
        match day {
            SchoolDay::Monday => &mut self.monday,
            SchoolDay::Tuesday => &mut self.tuesday,
            SchoolDay::Wednesday => &mut self.wednesday,
            SchoolDay::Thursday => &mut self.thursday,
            SchoolDay::Friday => &mut self.friday,
        }
    }
}

/// A teacher and their weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    #[serde(rename = "id", default, deserialize_with = "lenient_string")]
    pub teacher_id: String,
    #[serde(rename = "nombre", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(rename = "horario", default, deserialize_with = "null_as_default")]
    pub schedule: Vec<ScheduleSlot>,
}

impl TimetableEntry {
    pub fn new(
        teacher_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            name: name.into(),
            email: email.into(),
            schedule: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: ScheduleSlot) -> Self {
        self.schedule.push(slot);
        self
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// The whole timetable document as stored on disk.
pub type TimetableDocument = Vec<TimetableEntry>;
