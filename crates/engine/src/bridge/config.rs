use crossmod_types::{ComponentId, ProviderError};
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::{ExternalStateBridge, isolate, report_failure};
use crate::field_paths::{missing_path_details, resolve_json_path};

impl ExternalStateBridge {
    /// Resolves `dotted_key` in the config document of `component`.
    ///
    /// Returns `None` for the owner's own config, components without config,
    /// missing paths, JSON `null` leaves, and failures (all logged).
    pub fn fetch_config(&self, component: &ComponentId, dotted_key: &str) -> Option<Value> {
        self.try_fetch_config(component, dotted_key)
            .map_err(|error| report_failure(&error))
            .ok()
            .flatten()
    }

    /// Like [`fetch_config`](Self::fetch_config) but reports why no value was
    /// produced.
    pub fn try_fetch_config(&self, component: &ComponentId, dotted_key: &str) -> Result<Option<Value>, ProviderError> {
        if self.context.is_owner(component) {
            debug!(component = %component, key = dotted_key, "refusing to read own config");
            return Ok(None);
        }

        let handle = self.component(component)?;
        let Some(config) = isolate(component, "reading config", || handle.read_config())? else {
            warn!(component = %component, "component does not have any configuration options");
            return Ok(None);
        };

        match resolve_json_path(&config, dotted_key) {
            Some(Value::Null) => Ok(None),
            Some(value) => {
                trace!(component = %component, key = dotted_key, "config value resolved");
                Ok(Some(value.clone()))
            }
            None => {
                if let Some(details) = missing_path_details(&config, dotted_key) {
                    debug!(component = %component, "{}", details.message(component.as_str()));
                }
                Err(ProviderError::MissingPath {
                    component: component.to_string(),
                    path: dotted_key.to_string(),
                })
            }
        }
    }
}
