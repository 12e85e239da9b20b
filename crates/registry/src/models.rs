use std::sync::Arc;

use crossmod_types::{ComponentId, ComponentKind};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::trace;

use crate::Component;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("component '{0}' is already registered")]
    DuplicateComponent(ComponentId),
}

/// Installed components keyed by unique identifier, in discovery order.
///
/// The registry is filled once when the host discovers its components and is
/// treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<ComponentId, Arc<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an iterator of components, rejecting duplicates.
    pub fn with_components<I>(components: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn Component>>,
    {
        let mut registry = Self::new();
        for component in components {
            registry.insert(component)?;
        }
        Ok(registry)
    }

    /// Adds a component. Identifiers are unique across modules and content
    /// packs.
    pub fn insert(&mut self, component: Arc<dyn Component>) -> Result<(), RegistryError> {
        let id = component.id().clone();
        if self.components.contains_key(&id) {
            return Err(RegistryError::DuplicateComponent(id));
        }
        trace!(component = %id, kind = %component.kind(), "tracking component");
        self.components.insert(id, component);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<Arc<dyn Component>> {
        self.components.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.components.keys()
    }

    /// Components of the given kind, in discovery order.
    pub fn of_kind(&self, kind: ComponentKind) -> impl Iterator<Item = &Arc<dyn Component>> {
        self.components.values().filter(move |component| component.kind() == kind)
    }
}
