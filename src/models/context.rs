//! Fixed-length context field arrays
//!
//! Values are kept as the strings that appear in the label text so that the
//! `xx` placeholder and non-numeric fields (pitches, lyrics, flags) survive a
//! round trip untouched. Numeric fields are read through [`parse_number`]
//! which maps `xx` (or anything non-numeric) to `None`.

use serde::{Deserialize, Serialize};

/// Placeholder for "not defined / not applicable"
pub const UNDEFINED: &str = "xx";

/// Read a count or position field; `xx` and non-numeric text yield `None`
pub fn parse_number(value: &str) -> Option<usize> {
    value.parse().ok()
}

/// Render a count or position field
pub fn format_number(value: Option<usize>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => UNDEFINED.to_string(),
    }
}

/// The context array of a syllable, note, phrase or song
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ContextFields(Vec<String>);

impl ContextFields {
    /// `len` fields, all `xx`
    pub fn undefined(len: usize) -> Self {
        ContextFields(vec![UNDEFINED.to_string(); len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field value; out-of-range indices read as `xx`
    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map_or(UNDEFINED, String::as_str)
    }

    /// Set a field, growing the array with `xx` if needed
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.0.len() {
            self.0.resize(index + 1, UNDEFINED.to_string());
        }
        self.0[index] = value.into();
    }

    pub fn number(&self, index: usize) -> Option<usize> {
        parse_number(self.get(index))
    }

    pub fn set_number(&mut self, index: usize, value: Option<usize>) {
        self.set(index, format_number(value));
    }

    /// The first `count` fields, padded with `xx`
    pub fn prefix(&self, count: usize) -> Vec<String> {
        (0..count).map(|i| self.get(i).to_string()).collect()
    }

    /// Overwrite the leading fields with `values`, leaving the rest as they are
    pub fn assign<S: AsRef<str>>(&mut self, values: &[S]) {
        for (index, value) in values.iter().enumerate() {
            self.set(index, value.as_ref());
        }
    }
}
