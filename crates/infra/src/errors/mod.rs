//! Infrastructure error helpers

pub mod conversions;

pub use conversions::InfraError;
