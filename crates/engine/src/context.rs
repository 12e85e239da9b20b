//! Session-scoped state shared by every provider.
//!
//! A [`RuntimeContext`] is built once per host session, after the host has
//! discovered its components, and handed to each provider behind an `Arc`.
//! Dropping the last reference ends the session.

use std::sync::Arc;

use anyhow::{Context, Result};
use crossmod_registry::ComponentRegistry;
use crossmod_types::ComponentId;
use crossmod_util::{BridgeSettings, default_settings_path, init_tracing};
use tracing::info;

use crate::host::{HostEngine, NullHostEngine};

#[derive(Debug)]
pub struct RuntimeContext {
    owner: ComponentId,
    registry: Arc<ComponentRegistry>,
    host: Arc<dyn HostEngine>,
    settings: BridgeSettings,
}

impl RuntimeContext {
    /// Starts a session for the component `owner`, which hosts the providers.
    ///
    /// `settings.owner_id`, when set, overrides `owner`.
    pub fn new(owner: ComponentId, registry: Arc<ComponentRegistry>, host: Arc<dyn HostEngine>, settings: BridgeSettings) -> Self {
        let owner = settings
            .owner_id
            .as_deref()
            .and_then(ComponentId::parse)
            .unwrap_or(owner);
        info!(component_count = registry.len(), owner = %owner, "value provider session started");
        Self {
            owner,
            registry,
            host,
            settings,
        }
    }

    /// Builds a session reading settings from the default settings path and
    /// installs the tracing subscriber with the configured `log_filter`.
    ///
    /// A missing settings file yields defaults; an unreadable or malformed one
    /// is an error.
    pub fn load(owner: ComponentId, registry: Arc<ComponentRegistry>, host: Arc<dyn HostEngine>) -> Result<Self> {
        let path = default_settings_path();
        let settings = BridgeSettings::load_from(&path)
            .with_context(|| format!("Failed to load bridge settings: {}", path.display()))?;
        init_tracing(&settings.log_filter);
        Ok(Self::new(owner, registry, host, settings))
    }

    /// Builds a session for hosts without a token engine. Dynamic lookups
    /// always yield nothing.
    pub fn without_host(owner: ComponentId, registry: Arc<ComponentRegistry>, settings: BridgeSettings) -> Self {
        Self::new(owner, registry, Arc::new(NullHostEngine), settings)
    }

    pub fn owner(&self) -> &ComponentId {
        &self.owner
    }

    /// Whether `component` is the component hosting the providers.
    pub fn is_owner(&self, component: &ComponentId) -> bool {
        self.owner == *component
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn host(&self) -> &dyn HostEngine {
        self.host.as_ref()
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Whether the host discovered at least one component.
    pub fn has_components(&self) -> bool {
        !self.registry.is_empty()
    }
}
