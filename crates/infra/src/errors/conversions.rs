//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use exitpass_common::CommonError;
use exitpass_domain::ExitPassError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ExitPassError);

impl From<InfraError> for ExitPassError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ExitPassError> for InfraError {
    fn from(value: ExitPassError) -> Self {
        InfraError(value)
    }
}

impl std::fmt::Display for InfraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for InfraError {}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoExitPassError {
    fn into_exitpass(self) -> ExitPassError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ExitPassError */
/* -------------------------------------------------------------------------- */

impl IntoExitPassError for IoError {
    fn into_exitpass(self) -> ExitPassError {
        match self.kind() {
            ErrorKind::NotFound => ExitPassError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                ExitPassError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => ExitPassError::Serialization(self.to_string()),
            _ => ExitPassError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_exitpass())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json / toml → ExitPassError */
/* -------------------------------------------------------------------------- */

impl IntoExitPassError for JsonError {
    fn into_exitpass(self) -> ExitPassError {
        if self.is_io() {
            return ExitPassError::Storage(format!("JSON I/O failure: {self}"));
        }
        ExitPassError::Serialization(format!("invalid JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_exitpass())
    }
}

impl IntoExitPassError for TomlError {
    fn into_exitpass(self) -> ExitPassError {
        ExitPassError::Config(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_exitpass())
    }
}

/* -------------------------------------------------------------------------- */
/* CommonError → ExitPassError */
/* -------------------------------------------------------------------------- */

impl IntoExitPassError for CommonError {
    fn into_exitpass(self) -> ExitPassError {
        let description = self.to_string();
        match self {
            CommonError::Encryption { .. } => ExitPassError::Security(description),
            CommonError::Validation { .. } => ExitPassError::InvalidInput(description),
        }
    }
}

impl From<CommonError> for InfraError {
    fn from(value: CommonError) -> Self {
        InfraError(value.into_exitpass())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
