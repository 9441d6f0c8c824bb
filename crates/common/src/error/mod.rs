//! Low-level errors for key material and tokens
//!
//! `CommonError` is what the crypto primitives return; the infrastructure
//! layer maps it into `ExitPassError` at the crate boundary.
//!
//! Crate-specific errors wrap it rather than repeating its variants:
//!
//! ```rust,ignore
//! #[derive(Debug, thiserror::Error)]
//! pub enum StoreError {
//!     #[error("document rejected: {0}")]
//!     Rejected(String),
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```

use std::fmt;

pub type CommonResult<T> = Result<T, CommonError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Cipher setup, authentication tag or token framing failures.
    Encryption { message: String, operation: String },

    /// Input rejected before any work is done, e.g. a malformed key.
    Validation { field: String, message: String, value: Option<String> },
}

impl CommonError {
    /// Encryption failure during `operation` (`init`, `encrypt`, `decrypt`,
    /// `decode`).
    pub fn encryption_op(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encryption { message: message.into(), operation: operation.into() }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: None }
    }

    /// Validation failure that echoes the offending value.
    ///
    /// Never pass secret material as `value`.
    pub fn validation_with_value(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation { field: field.into(), message: message.into(), value: Some(value.into()) }
    }
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encryption { message, operation } => {
                write!(f, "Encryption error during '{operation}': {message}")
            }
            Self::Validation { field, message, value: Some(value) } => {
                write!(f, "Validation error for field '{field}' (value: '{value}'): {message}")
            }
            Self::Validation { field, message, value: None } => {
                write!(f, "Validation error for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for CommonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_operation() {
        let err = CommonError::encryption_op("decrypt", "authentication failed");
        assert_eq!(err.to_string(), "Encryption error during 'decrypt': authentication failed");
    }

    #[test]
    fn validation_echoes_value_only_when_given() {
        let bare = CommonError::validation("data_key", "key is empty");
        assert_eq!(bare.to_string(), "Validation error for field 'data_key': key is empty");

        let with_value = CommonError::validation_with_value("data_key", "wrong length", "31");
        assert_eq!(
            with_value.to_string(),
            "Validation error for field 'data_key' (value: '31'): wrong length"
        );
    }
}
