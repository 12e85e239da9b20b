//! Dotted-path resolution over structured config documents.
//!
//! `volume.music` walks `{"volume": {"music": ...}}` one segment at a time.
//! Resolution never fails loudly: a missing key or a non-object intermediate
//! simply yields `None`, and [`missing_path_details`] builds the diagnostics
//! callers log.

use serde_json::Value;

/// Resolve a dotted path against a JSON document.
///
/// The root must be an object. A single-segment path returns the root member
/// whatever its shape; longer paths require every intermediate value to be an
/// object.
pub fn resolve_json_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = root.as_object()?.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Diagnostic details for a path that did not resolve.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MissingPathDetails {
    /// Path as requested.
    pub configured_path: String,
    /// Deepest prefix that did resolve (empty when the first segment failed).
    pub resolved_prefix: String,
    /// Segment that could not be looked up.
    pub missing_segment: String,
    /// Whether the walk stopped because the value at `resolved_prefix` is not an object.
    pub reached_non_object: bool,
    /// Sorted fields available where the walk stopped.
    pub available_fields: Vec<String>,
}

impl MissingPathDetails {
    /// Builds a log-facing message.
    pub fn message(&self, component: &str) -> String {
        if self.reached_non_object {
            let location = if self.resolved_prefix.is_empty() {
                "config root".to_string()
            } else {
                format!("'{}'", self.resolved_prefix)
            };
            return format!(
                "config of '{}' has no '{}': {} is not an object",
                component, self.configured_path, location
            );
        }
        let available_fields = if self.available_fields.is_empty() {
            "none".to_string()
        } else {
            self.available_fields.join(", ")
        };
        format!(
            "config of '{}' has no '{}' (missing '{}', fields: {})",
            component, self.configured_path, self.missing_segment, available_fields
        )
    }
}

/// Explains why `path` does not resolve against `root`; `None` when it does.
pub fn missing_path_details(root: &Value, path: &str) -> Option<MissingPathDetails> {
    let mut current = root;
    let mut resolved: Vec<&str> = Vec::new();
    for segment in path.split('.') {
        let Value::Object(map) = current else {
            return Some(MissingPathDetails {
                configured_path: path.to_string(),
                resolved_prefix: resolved.join("."),
                missing_segment: segment.to_string(),
                reached_non_object: true,
                available_fields: Vec::new(),
            });
        };
        match map.get(segment) {
            Some(next) => {
                current = next;
                resolved.push(segment);
            }
            None => {
                return Some(MissingPathDetails {
                    configured_path: path.to_string(),
                    resolved_prefix: resolved.join("."),
                    missing_segment: segment.to_string(),
                    reached_non_object: false,
                    available_fields: json_top_level_fields(current),
                });
            }
        }
    }
    None
}

/// Returns sorted top-level object field names from a JSON value.
pub fn json_top_level_fields(value: &Value) -> Vec<String> {
    let Value::Object(map) = value else {
        return Vec::new();
    };
    let mut fields = map.keys().cloned().collect::<Vec<_>>();
    fields.sort();
    fields
}
