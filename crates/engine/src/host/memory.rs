//! In-memory host engine and token shims.

use std::{
    fmt,
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use crossmod_registry::ComponentError;
use crossmod_types::{ComponentId, InputArguments};
use indexmap::IndexMap;

use super::{HostEngine, TokenContext, TokenHandle};

/// Host engine whose readiness and token contexts are set explicitly.
#[derive(Debug, Default)]
pub struct MemoryHostEngine {
    ready: AtomicBool,
    contexts: RwLock<IndexMap<ComponentId, Arc<MemoryTokenContext>>>,
}

impl MemoryHostEngine {
    /// Creates an engine that is not ready and has scanned no components.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Token context for `component`, creating it on first use (the engine
    /// "scanning" the component).
    pub fn context_for(&self, component: &ComponentId) -> Arc<MemoryTokenContext> {
        let mut contexts = self.contexts.write().expect("host contexts lock poisoned");
        Arc::clone(contexts.entry(component.clone()).or_default())
    }
}

impl HostEngine for MemoryHostEngine {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn component_token_context(&self, component: &ComponentId) -> Option<Arc<dyn TokenContext>> {
        let contexts = self.contexts.read().expect("host contexts lock poisoned");
        contexts
            .get(component)
            .map(|context| Arc::clone(context) as Arc<dyn TokenContext>)
    }
}

/// Named tokens defined by one component.
#[derive(Debug, Default)]
pub struct MemoryTokenContext {
    tokens: RwLock<IndexMap<String, Arc<dyn TokenHandle>>>,
}

impl MemoryTokenContext {
    /// Defines (or replaces) a token under its own name.
    pub fn define(&self, token: Arc<dyn TokenHandle>) {
        let name = token.name().to_string();
        self.tokens.write().expect("token context lock poisoned").insert(name, token);
    }

    pub fn remove(&self, name: &str) -> Option<Arc<dyn TokenHandle>> {
        self.tokens.write().expect("token context lock poisoned").shift_remove(name)
    }
}

impl TokenContext for MemoryTokenContext {
    fn get_token(&self, name: &str) -> Option<Arc<dyn TokenHandle>> {
        self.tokens.read().expect("token context lock poisoned").get(name).cloned()
    }
}

/// Token holding a fixed list of values that its owner may replace.
#[derive(Debug)]
pub struct MemoryToken {
    name: String,
    values: RwLock<Vec<String>>,
}

impl MemoryToken {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: RwLock::new(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn set_values<I, S>(&self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.values.write().expect("token values lock poisoned") = values.into_iter().map(Into::into).collect();
    }
}

impl TokenHandle for MemoryToken {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_produce_values(&self, _input: &InputArguments) -> Option<Result<Vec<String>, ComponentError>> {
        Some(Ok(self.values.read().expect("token values lock poisoned").clone()))
    }
}

/// Adapts a foreign value-producing callable to [`TokenHandle`].
///
/// Host integrations wrap whatever object the engine hands back in a closure
/// that performs the call, keeping all knowledge of the foreign type in one
/// place.
pub struct FnTokenHandle<F> {
    name: String,
    produce: F,
}

impl<F> FnTokenHandle<F>
where
    F: Fn(&InputArguments) -> Result<Vec<String>, ComponentError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, produce: F) -> Self {
        Self {
            name: name.into(),
            produce,
        }
    }
}

impl<F> fmt::Debug for FnTokenHandle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTokenHandle").field("name", &self.name).finish()
    }
}

impl<F> TokenHandle for FnTokenHandle<F>
where
    F: Fn(&InputArguments) -> Result<Vec<String>, ComponentError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn try_produce_values(&self, input: &InputArguments) -> Option<Result<Vec<String>, ComponentError>> {
        Some((self.produce)(input))
    }
}
