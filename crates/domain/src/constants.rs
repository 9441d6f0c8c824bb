//! Application constants
//!
//! Centralized location for the school day grid, the return-hour labels
//! offered by the exit form and the file/env names shared by the crates.

use crate::types::SessionKind;

// School day grid: (start, end, name, kind). Ordered, non-overlapping.
// 15:25-16:00 is an unlisted gap between the morning and evening shifts.
pub const SCHOOL_DAY_SESSIONS: &[(&str, &str, &str, SessionKind)] = &[
    ("07:35", "08:30", "Sesión 1", SessionKind::Class),
    ("08:30", "09:25", "Sesión 2", SessionKind::Class),
    ("09:25", "10:20", "Sesión 3", SessionKind::Class),
    ("10:20", "11:15", "Sesión 4", SessionKind::Class),
    ("11:15", "11:45", "Recreo 1", SessionKind::Break),
    ("11:45", "12:40", "Sesión 5", SessionKind::Class),
    ("12:40", "13:35", "Sesión 6", SessionKind::Class),
    ("13:35", "14:30", "Sesión 7", SessionKind::Class),
    ("14:30", "15:25", "Sesión 8", SessionKind::Class),
    ("16:00", "16:55", "Sesión 9", SessionKind::Class),
    ("16:55", "17:50", "Sesión 10", SessionKind::Class),
    ("17:50", "18:45", "Sesión 11", SessionKind::Class),
    ("18:45", "19:00", "Recreo 2", SessionKind::Break),
    ("19:00", "19:55", "Sesión 12", SessionKind::Class),
    ("19:55", "20:50", "Sesión 13", SessionKind::Class),
    ("20:50", "21:45", "Sesión 14", SessionKind::Class),
];

// Return-hour checkbox labels -> period names.
pub const RETURN_LABELS: &[(&str, &str)] = &[
    ("1ª", "Sesión 1"),
    ("2ª", "Sesión 2"),
    ("3ª", "Sesión 3"),
    ("4ª", "Sesión 4"),
    ("5ª", "Sesión 5"),
    ("6ª", "Sesión 6"),
    ("7ª", "Sesión 7"),
    ("8ª", "Sesión 8"),
    ("9ª", "Sesión 9"),
    ("10ª", "Sesión 10"),
    ("11ª", "Sesión 11"),
    ("12ª", "Sesión 12"),
    ("13ª", "Sesión 13"),
    ("14ª", "Sesión 14"),
];

// Separator used by the exit form when it joins the selected hours.
pub const RETURN_SELECTION_SEPARATOR: char = ',';

// Timetable group codes containing this marker are treated as qualified
// sub-group codes (e.g. "E_1A").
pub const QUALIFIED_GROUP_MARKER: char = '_';

// Storage file names and suffixes
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_TIMETABLE_FILE: &str = "horarios_profesores_limpio.json";
pub const DEFAULT_ROSTER_FILE: &str = "students.json";
pub const BACKUP_SUFFIX: &str = "bak";
pub const ENCRYPTED_BACKUP_SUFFIX: &str = "enc.bak";
pub const TEMP_SUFFIX: &str = "tmp";

// Environment variables
pub const ENV_DATA_KEY: &str = "STUDENTS_DATA_KEY";
pub const ENV_DATA_DIR: &str = "EXITPASS_DATA_DIR";
pub const ENV_TIMETABLE_PATH: &str = "EXITPASS_TIMETABLE_PATH";
pub const ENV_ROSTER_PATH: &str = "EXITPASS_ROSTER_PATH";
pub const ENV_BACKUP_ON_SAVE: &str = "EXITPASS_BACKUP_ON_SAVE";
pub const ENV_SENDER_EMAIL: &str = "EXITPASS_SENDER_EMAIL";
pub const ENV_SENDER_NAME: &str = "EXITPASS_SENDER_NAME";
pub const ENV_REPLY_TO: &str = "EXITPASS_REPLY_TO";
pub const ENV_GUARDIAN_EMAILS: &str = "EXITPASS_GUARDIAN_EMAILS";
pub const ENV_LOG_FILTER: &str = "EXITPASS_LOG";
pub const ENV_LOG_FORMAT: &str = "EXITPASS_LOG_FORMAT";

// Notification defaults
pub const DEFAULT_SENDER_NAME: &str = "Partes de Salida";
pub const GUARDIAN_SENDER_NAME: &str = "Sistema Partes de Salida";
