//! Exit notification pipeline
//!
//! `ExitEvent -> current period -> scope -> teachers -> messages`

pub mod dispatch;
pub mod scope;
pub mod service;
pub mod templates;

pub use dispatch::resolve_teachers;
pub use scope::{label_to_period, parse_return_selection, resolve_scope};
pub use service::ExitNotificationService;
pub use templates::NoticeTemplates;
