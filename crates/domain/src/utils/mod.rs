//! Pure helpers shared by the domain types

pub mod lenient;
