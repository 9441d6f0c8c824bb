//! Student roster document

use serde::{Deserialize, Serialize};

use crate::utils::lenient::{lenient_string, null_as_default};

/// Legal guardian of a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dni: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default, deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub urgent: bool,
}

/// One student as stored in the roster file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub group: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dni: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub course: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub photo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tutor1: Guardian,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tutor2: Guardian,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<PhoneNumber>,
}

impl StudentRecord {
    /// Phones flagged for emergencies.
    pub fn urgent_phones(&self) -> impl Iterator<Item = &PhoneNumber> {
        self.phones.iter().filter(|p| p.urgent)
    }
}

pub type RosterDocument = Vec<StudentRecord>;
