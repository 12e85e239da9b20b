use std::sync::Arc;

use crossmod_types::{ComponentId, InputArguments};
use tracing::{debug, trace, warn};

use super::{ExternalStateBridge, isolate, isolate_host, report_failure};
use crate::host::TokenHandle;

impl ExternalStateBridge {
    /// Finds the token `key` that `component` defined inside the host engine.
    ///
    /// Walks engine → per-component token context → named token. Any missing
    /// hop (engine not initialized, component not scanned yet, token not
    /// defined yet) yields `None`.
    pub fn fetch_dynamic_delegate(&self, component: &ComponentId, key: &str) -> Option<Arc<dyn TokenHandle>> {
        let host = self.context.host();
        if !self.host_is_ready() {
            trace!(component = %component, token = key, "host engine not ready");
            return None;
        }

        let context = match isolate(component, "reading token context", || Ok(host.component_token_context(component))) {
            Ok(Some(context)) => context,
            Ok(None) => {
                debug!(component = %component, "host engine has no token context for component yet");
                return None;
            }
            Err(error) => {
                report_failure(&error);
                return None;
            }
        };

        trace!(component = %component, token = key, "grabbing token");
        match isolate(component, "looking up token", || Ok(context.get_token(key))) {
            Ok(Some(handle)) => Some(handle),
            Ok(None) => {
                debug!(component = %component, token = key, "token not defined");
                None
            }
            Err(error) => {
                report_failure(&error);
                None
            }
        }
    }

    /// Whether the host engine reports ready. A panicking engine counts as
    /// not ready.
    pub fn host_is_ready(&self) -> bool {
        isolate_host("checking readiness", || self.context.host().is_ready()).unwrap_or(false)
    }

    /// Values currently produced by the token `key` of `component`.
    pub fn fetch_dynamic_values(&self, component: &ComponentId, key: &str) -> Vec<String> {
        self.fetch_dynamic_delegate(component, key)
            .map(|handle| DynamicDelegateAdapter::produce_values(component, handle.as_ref()))
            .unwrap_or_default()
    }
}

/// Invokes externally owned tokens through their value-producing capability.
#[derive(Debug, Clone, Copy)]
pub struct DynamicDelegateAdapter;

impl DynamicDelegateAdapter {
    /// Calls `handle` with the empty-input sentinel.
    ///
    /// A handle without the capability, a reported failure, or a panic all
    /// produce an empty list; nothing is propagated.
    pub fn produce_values(component: &ComponentId, handle: &dyn TokenHandle) -> Vec<String> {
        let input = InputArguments::empty();
        let produced = isolate(component, "producing token values", || handle.try_produce_values(&input).transpose());
        match produced {
            Ok(Some(values)) => values,
            Ok(None) => {
                let token = isolate(component, "reading token name", || Ok(handle.name().to_string()))
                    .unwrap_or_else(|_| "<unnamed>".to_string());
                warn!(component = %component, token = %token, "token does not expose a value-producing capability");
                Vec::new()
            }
            Err(error) => {
                report_failure(&error);
                Vec::new()
            }
        }
    }
}
