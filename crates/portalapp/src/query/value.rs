//! Field value types.
//!
//! Records are read through typed accessors that project a field into a
//! [`FieldValue`]. The engine only ever sees these values, never the record
//! itself, which keeps it generic over record shape.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Runtime representation of a record field.
///
/// Covers every field shape the portal lists: free text, enumerated
/// categories, numbers, instants and tag-like string lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text (titles, names, emails)
    Text(String),

    /// Enumerated category stored as its wire value (e.g. `"approved"`)
    Category(String),

    /// Any numeric field (progress, file size)
    Number(f64),

    /// A point in time (creation, submission, upload)
    Timestamp(DateTime<Utc>),

    /// List of strings (e.g. `tags`, `keywords`)
    List(Vec<String>),

    /// The record has no value for this field.
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn category(value: impl Into<String>) -> Self {
        FieldValue::Category(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Lift an optional timestamp, mapping `None` to [`FieldValue::Missing`].
    pub fn timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Timestamp)
    }

    /// Lift an optional string, mapping `None` to [`FieldValue::Missing`].
    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::text)
    }

    /// True for `Missing` and for empty lists: neither has anything to sort by.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Strict equality against a selected filter value.
    ///
    /// Text and categories compare exactly, numbers compare after parsing the
    /// selection, lists match when any element equals the selection.
    /// Timestamps and missing values never match.
    pub fn matches_selection(&self, selected: &str) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Category(s) => s == selected,
            FieldValue::Number(n) => selected.parse::<f64>().is_ok_and(|sel| sel == *n),
            FieldValue::List(items) => items.iter().any(|item| item == selected),
            FieldValue::Timestamp(_) | FieldValue::Missing => false,
        }
    }

    /// The strings free-text search is allowed to look into.
    pub fn searchable_strings(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Category(s) => vec![s.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
            FieldValue::Number(_) | FieldValue::Timestamp(_) | FieldValue::Missing => Vec::new(),
        }
    }

    /// Values this field contributes to a data-derived option list.
    pub fn option_values(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) | FieldValue::Category(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
            FieldValue::Number(n) => vec![n.to_string()],
            FieldValue::Timestamp(_) | FieldValue::Missing => Vec::new(),
        }
    }
}
