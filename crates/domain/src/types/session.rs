//! School day session types
//!
//! A school day is a fixed list of named time windows. Class windows carry
//! lessons; break windows never produce teacher notifications.

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::{ExitPassError, Result};
use crate::impl_domain_enum_conversions;

/// Whether a window is a lesson or a recess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Class,
    Break,
}

impl_domain_enum_conversions!(SessionKind {
    Class => "class",
    Break => "break",
});

/// One named half-open time window `[start, end)` of the school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub name: String,
    pub kind: SessionKind,
}

impl SessionWindow {
    /// Build a window, rejecting empty or inverted ranges.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        name: impl Into<String>,
        kind: SessionKind,
    ) -> Result<Self> {
        let name = name.into();
        if end <= start {
            return Err(ExitPassError::InvalidInput(format!(
                "session '{name}' ends at {end} before it starts at {start}"
            )));
        }
        if name.trim().is_empty() {
            return Err(ExitPassError::InvalidInput("session name must not be empty".into()));
        }
        Ok(Self { start, end, name, kind })
    }

    /// Build a window from `HH:MM` strings.
    pub fn parse(start: &str, end: &str, name: &str, kind: SessionKind) -> Result<Self> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?, name, kind)
    }

    /// Half-open containment at minute resolution.
    pub fn contains(&self, at: NaiveTime) -> bool {
        let at = truncate_to_minute(at);
        self.start <= at && at < self.end
    }

    pub fn is_break(&self) -> bool {
        self.kind == SessionKind::Break
    }
}

/// The window active at some instant, with its position in the day list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivePeriod {
    pub name: String,
    pub index: usize,
}

/// Teaching days. Weekends have no timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchoolDay {
    #[serde(rename = "Lunes")]
    Monday,
    #[serde(rename = "Martes")]
    Tuesday,
    #[serde(rename = "Miércoles", alias = "Miercoles")]
    Wednesday,
    #[serde(rename = "Jueves")]
    Thursday,
    #[serde(rename = "Viernes")]
    Friday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 5] =
        [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday];

    /// Map a calendar weekday; Saturday and Sunday yield `None`.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn to_weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
        }
    }

    /// Day name as written in the timetable export.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Lunes",
            Self::Tuesday => "Martes",
            Self::Wednesday => "Miércoles",
            Self::Thursday => "Jueves",
            Self::Friday => "Viernes",
        }
    }
}

impl std::fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse `HH:MM` (or `HH:MM:SS`) into a time of day.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| ExitPassError::InvalidInput(format!("invalid time '{value}': {e}")))
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(at: NaiveTime) -> NaiveTime {
    at.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn window_is_half_open() {
        let w = SessionWindow::parse("08:30", "09:25", "Sesión 2", SessionKind::Class).unwrap();
        assert!(w.contains(hm(8, 30)));
        assert!(w.contains(hm(9, 24)));
        assert!(!w.contains(hm(9, 25)));
        assert!(!w.contains(hm(8, 29)));
    }

    #[test]
    fn seconds_are_ignored() {
        let w = SessionWindow::parse("08:30", "09:25", "Sesión 2", SessionKind::Class).unwrap();
        let almost_end = NaiveTime::from_hms_milli_opt(9, 24, 59, 999).unwrap();
        assert!(w.contains(almost_end));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = SessionWindow::parse("10:00", "09:00", "x", SessionKind::Class).unwrap_err();
        assert!(matches!(err, ExitPassError::InvalidInput(_)));
        assert!(SessionWindow::parse("10:00", "10:00", "x", SessionKind::Class).is_err());
        assert!(SessionWindow::parse("9h", "10:00", "x", SessionKind::Class).is_err());
    }

    #[test]
    fn weekend_has_no_school_day() {
        assert_eq!(SchoolDay::from_weekday(Weekday::Sat), None);
        assert_eq!(SchoolDay::from_weekday(Weekday::Sun), None);
        assert_eq!(SchoolDay::from_weekday(Weekday::Wed), Some(SchoolDay::Wednesday));
        for day in SchoolDay::ALL {
            assert_eq!(SchoolDay::from_weekday(day.to_weekday()), Some(day));
        }
    }

    #[test]
    fn school_day_uses_export_labels() {
        assert_eq!(SchoolDay::Wednesday.to_string(), "Miércoles");
        let parsed: SchoolDay = serde_json::from_str("\"Miercoles\"").unwrap();
        assert_eq!(parsed, SchoolDay::Wednesday);
    }

    #[test]
    fn session_kind_parses_case_insensitively() {
        assert_eq!("Break".parse::<SessionKind>().unwrap(), SessionKind::Break);
        assert_eq!(SessionKind::Class.to_string(), "class");
    }
}
