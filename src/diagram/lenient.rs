//! Schema-tolerant decoding helpers.
//!
//! Diagrams come from a UI editor and are loosely typed: ids may be numbers, fields may be
//! `null` or missing, and arrays may contain junk. These helpers absorb that looseness so
//! the raw structs can stay plain `String` fields.

use serde::de::{Deserialize, DeserializeOwned, Deserializer, Error, Unexpected};
use serde_json::Value;

/// Decodes any JSON value into a string, the way a scalar would print.
///
/// Strings are taken verbatim, booleans use their JSON text, numbers print without a
/// trailing `.0` when they hold a whole value (`1.0` reads as `"1"`). Everything else
/// (null, arrays, objects) becomes the empty string, which the filtering step treats the
/// same as a missing field. Pair with `#[serde(default)]` so absent fields also land here.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => format_number(&n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Structured values count as missing and are not stringified.
        Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Format a number, dropping the fraction of whole floats.
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// An array element or nested value that may or may not be a usable record.
///
/// Only JSON objects are decoded into `T`. Any other value, or an object `T` refuses, is
/// kept as `Skipped` instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    Record(T),
    Skipped,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Entry::Skipped
    }
}

impl<T> Entry<T> {
    pub fn into_record(self) -> Option<T> {
        match self {
            Entry::Record(record) => Some(record),
            Entry::Skipped => None,
        }
    }

    pub fn as_record(&self) -> Option<&T> {
        match self {
            Entry::Record(record) => Some(record),
            Entry::Skipped => None,
        }
    }
}

impl<T: DeserializeOwned> Entry<T> {
    /// Decodes an already parsed value. Only objects are decoded.
    pub fn from_value(value: Value) -> Self {
        match value {
            object @ Value::Object(_) => T::deserialize(object)
                .map(Entry::Record)
                .unwrap_or(Entry::Skipped),
            _ => Entry::Skipped,
        }
    }
}

impl<'de, T> Deserialize<'de> for Entry<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Entry::from_value)
    }
}

/// A top-level list of records such as `nodes` or `edges`.
///
/// Arrays are decoded entry by entry. Scalars, `null` and `{}` carry no values and read as
/// an empty list. A non-empty object is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<T>(pub Vec<Entry<T>>);

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section(Vec::new())
    }
}

impl<T> Section<T> {
    /// The entries that decoded into records, in document order.
    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.0.iter().filter_map(Entry::as_record)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, T> Deserialize<'de> for Section<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Section(items.into_iter().map(Entry::from_value).collect())),
            Value::Object(map) if !map.is_empty() => {
                Err(D::Error::invalid_type(Unexpected::Map, &"an array of records"))
            }
            _ => Ok(Section::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        #[serde(default, deserialize_with = "lenient_string")]
        name: String,
    }

    #[test]
    fn test_lenient_string_coercions() {
        let cases = [
            (r#"{"name": "alpha"}"#, "alpha"),
            (r#"{"name": 42}"#, "42"),
            (r#"{"name": 1.5}"#, "1.5"),
            (r#"{"name": 1.0}"#, "1"),
            (r#"{"name": -2.0}"#, "-2"),
            (r#"{"name": 12345678901234567890}"#, "12345678901234567890"),
            (r#"{"name": true}"#, "true"),
            (r#"{"name": null}"#, ""),
            (r#"{"name": [1, 2]}"#, ""),
            (r#"{"name": {"x": 1}}"#, ""),
            (r#"{}"#, ""),
        ];
        for (json, expected) in cases {
            let named: Named = serde_json::from_str(json).unwrap();
            assert_eq!(named.name, expected, "input: {}", json);
        }
    }

    #[test]
    fn test_entry_skips_non_objects() {
        let entries: Vec<Entry<Named>> =
            serde_json::from_str(r#"[{"name": "a"}, "b", 3, null, ["c"], {"name": "d"}]"#)
                .unwrap();
        let names: Vec<_> = entries
            .into_iter()
            .filter_map(Entry::into_record)
            .map(|n| n.name)
            .collect();
        assert_eq!(names, vec!["a", "d"]);
    }

    #[test]
    fn test_section_reads_scalars_as_empty() {
        for json in ["5", r#""A""#, "true", "null", "{}", "[]"] {
            let section: Section<Named> = serde_json::from_str(json).unwrap();
            assert!(section.is_empty(), "input: {}", json);
        }

        let section: Section<Named> =
            serde_json::from_str(r#"[{"name": "a"}, 7, {"name": "b"}]"#).unwrap();
        assert_eq!(section.len(), 3);
        let names: Vec<_> = section.records().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_section_rejects_populated_object() {
        let result = serde_json::from_str::<Section<Named>>(r#"{"name": "a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_default_is_skipped() {
        assert_eq!(Entry::<Named>::default(), Entry::Skipped);
        assert!(Entry::<Named>::Skipped.as_record().is_none());
    }
}
