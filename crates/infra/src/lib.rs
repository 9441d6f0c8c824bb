//! # Exitpass Infrastructure
//!
//! Infrastructure implementations around the pure core.
//!
//! This crate contains:
//! - The encrypted-at-rest JSON document store
//! - Key loading from the environment
//! - Configuration loading (env, JSON, TOML)
//! - Timetable and roster repositories
//! - Logging setup
//!
//! ## Architecture
//! - Implements ports defined in `exitpass-core`
//! - Depends on `exitpass-common`, `exitpass-domain` and `exitpass-core`
//! - Contains all "impure" code (filesystem, environment)

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod key_manager;
pub mod observability;
pub mod repositories;
pub mod secure_store;

// Re-export commonly used items
pub use bootstrap::AppContext;
pub use errors::InfraError;
pub use key_manager::KeyManager;
pub use observability::{init_logging, LogFormat};
pub use repositories::{RosterRepository, TimetableRepository};
pub use secure_store::{SecureStore, StoreLoad, UnavailableReason};
