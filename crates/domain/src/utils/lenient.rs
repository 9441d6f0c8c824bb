//! Tolerant serde helpers for hand-edited JSON exports
//!
//! Timetable and roster files come from spreadsheet exports where a field
//! may be a string, a number or `null`. These helpers accept all three.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Deserialize a string, number, bool or `null` into a `String`.
///
/// `null` becomes the empty string.
///
/// ```
/// use exitpass_domain::utils::lenient::lenient_string;
///
/// #[derive(serde::Deserialize)]
/// struct Row {
///     #[serde(deserialize_with = "lenient_string")]
///     aula: String,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"aula": 101}"#).unwrap();
/// assert_eq!(row.aula, "101");
/// ```
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientStringVisitor)
}

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct LenientStringVisitor;

impl<'de> Visitor<'de> for LenientStringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a string, number, bool or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        value: String,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn accepts_mixed_scalars() {
        let p: Probe = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(p.value, "42");
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, "");
        let p: Probe = serde_json::from_str(r#"{"value": "B12"}"#).unwrap();
        assert_eq!(p.value, "B12");
        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn null_collection_becomes_empty() {
        let p: Probe = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(p.items.is_empty());
    }

    #[test]
    fn rejects_objects() {
        assert!(serde_json::from_str::<Probe>(r#"{"value": {"a": 1}}"#).is_err());
    }
}
