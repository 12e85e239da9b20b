//! External state bridge.
//!
//! Translates a `(component id, key)` request into a concrete external value.
//! Each adapter runs its collaborator calls inside [`isolate`], which turns
//! both reported errors and panics into [`ProviderError::ExternalFailure`].
//! Public `fetch_*` methods log every failure and return "no value", so one
//! broken component never aborts a refresh across the others.
//!
//! Modules:
//! - `config`: structured config lookups through the path resolver
//! - `translation`: locale-aware string lookups
//! - `asset`: internal asset name canonicalization
//! - `dynamic`: tokens owned by the host engine, and the delegate adapter

mod asset;
mod config;
mod dynamic;
mod translation;

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use crossmod_registry::{Component, ComponentError};
use crossmod_types::{ComponentId, ProviderError};
use tracing::{debug, error, warn};

use crate::RuntimeContext;

pub use dynamic::DynamicDelegateAdapter;
pub use translation::TranslationEntry;

/// Fetches single logical values from other components on behalf of providers.
#[derive(Debug, Clone)]
pub struct ExternalStateBridge {
    context: Arc<RuntimeContext>,
}

impl ExternalStateBridge {
    pub fn new(context: Arc<RuntimeContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &RuntimeContext {
        &self.context
    }

    fn component(&self, component: &ComponentId) -> Result<Arc<dyn Component>, ProviderError> {
        self.context
            .registry()
            .lookup(component.as_str())
            .ok_or_else(|| ProviderError::UnknownComponent(component.to_string()))
    }
}

/// Runs a collaborator call, converting errors and panics into
/// [`ProviderError::ExternalFailure`].
pub(crate) fn isolate<T>(
    component: &ComponentId,
    operation: &'static str,
    call: impl FnOnce() -> Result<T, ComponentError>,
) -> Result<T, ProviderError> {
    let failure = |message: String| ProviderError::ExternalFailure {
        component: component.to_string(),
        operation,
        message,
    };
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(failure(error.to_string())),
        Err(payload) => Err(failure(format!("panicked: {}", panic_message(&*payload)))),
    }
}

/// Runs a call into the host engine that has no component in scope,
/// returning `None` (logged) when it panics.
pub(crate) fn isolate_host<T>(operation: &'static str, call: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(value) => Some(value),
        Err(payload) => {
            error!(operation, message = %panic_message(&*payload), "host engine failure");
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "non-string panic payload".to_string()
}

/// Logs a swallowed bridge failure at a level matching its severity.
pub(crate) fn report_failure(error: &ProviderError) {
    match error {
        ProviderError::ExternalFailure { .. } => error!(error = %error, "external component failure"),
        ProviderError::MissingPath { .. } => warn!(error = %error, "config path not found"),
        ProviderError::UnknownComponent(_) | ProviderError::InvalidArity { .. } => {
            debug!(error = %error, "bridge request rejected")
        }
    }
}
