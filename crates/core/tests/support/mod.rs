//! Shared test helpers for `exitpass-core` integration tests.
//!
//! Fixtures build a small but realistic timetable so scenario tests can
//! focus on behaviour instead of boilerplate.

pub mod timetable;
