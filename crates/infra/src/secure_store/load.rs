//! Outcome of reading an encrypted document

use serde::Serialize;

/// Why an existing document could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The file exists but could not be read.
    Read,
    /// Wrong key, corrupted token or unknown token format.
    Decrypt,
    /// Decrypted bytes are not the expected JSON document.
    Parse,
}

impl UnavailableReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Decrypt => "decrypt",
            Self::Parse => "parse",
        }
    }
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`SecureStore::load`](super::SecureStore::load).
///
/// Every variant except `Loaded` degrades to an empty document through
/// [`StoreLoad::into_document`]; the variant only tells the logging layer
/// why.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLoad<T> {
    Loaded(T),
    /// No file at the path (first run).
    Missing,
    /// The file holds no bytes.
    Empty,
    Unavailable { reason: UnavailableReason, detail: String },
}

impl<T> StoreLoad<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            Self::Unavailable { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn document(&self) -> Option<&T> {
        match self {
            Self::Loaded(doc) => Some(doc),
            _ => None,
        }
    }

    /// Short status label for logs.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

impl<T: Default> StoreLoad<T> {
    /// The document, or `T::default()` for every other outcome.
    pub fn into_document(self) -> T {
        match self {
            Self::Loaded(doc) => doc,
            _ => T::default(),
        }
    }
}
