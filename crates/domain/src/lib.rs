//! # Exitpass Domain
//!
//! Business domain types and models for the student exit logbook.
//!
//! This crate contains:
//! - Domain data types (session windows, timetable entries, exit events)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (the school day grid and return-hour labels)
//!
//! ## Architecture
//! - No dependencies on other Exitpass crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
