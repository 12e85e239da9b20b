use std::{slice, vec};

use crossmod_types::split_delimited;
use serde_json::Value;
use tracing::debug;

/// Finite, restartable sequence of token values.
///
/// Values are materialized when produced, so iterating any number of times
/// has no side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenValues(Vec<String>);

impl TokenValues {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Splits comma-delimited text into trimmed, non-empty values.
    ///
    /// `"a, b,c"` yields `["a", "b", "c"]`.
    pub fn from_delimited(raw: &str) -> Self {
        split_delimited(raw).map(str::to_string).collect()
    }

    /// Projects a JSON leaf into token values.
    ///
    /// Strings are split on commas; numbers and booleans yield their JSON
    /// text; arrays yield the projection of each element; `null` and objects
    /// yield nothing.
    pub fn from_json(value: &Value) -> Self {
        let mut values = Vec::new();
        project_json(value, &mut values);
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

fn project_json(value: &Value, values: &mut Vec<String>) {
    match value {
        Value::String(text) => values.extend(split_delimited(text).map(str::to_string)),
        Value::Number(number) => values.push(number.to_string()),
        Value::Bool(flag) => values.push(flag.to_string()),
        Value::Array(items) => items.iter().for_each(|item| project_json(item, values)),
        Value::Null => {}
        Value::Object(_) => debug!("skipping non-scalar config value"),
    }
}

impl FromIterator<String> for TokenValues {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TokenValues {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenValues {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
