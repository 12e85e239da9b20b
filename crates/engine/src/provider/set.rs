use std::sync::Arc;

use tracing::{debug, info};

use super::{AssetProvider, ConfigProvider, DynamicProvider, TranslationProvider, ValueProvider};
use crate::RuntimeContext;

/// A provider paired with the token name the host registers it under.
#[derive(Debug)]
pub struct RegisteredToken {
    pub name: String,
    pub provider: Box<dyn ValueProvider + Send>,
}

/// The four providers this crate exposes, named from [`TokenNames`](crossmod_util::TokenNames).
#[derive(Debug)]
pub struct ProviderSet {
    tokens: Vec<RegisteredToken>,
}

impl ProviderSet {
    pub fn new(context: Arc<RuntimeContext>) -> Self {
        let names = context.settings().token_names.clone();
        let tokens = vec![
            RegisteredToken {
                name: names.config,
                provider: Box::new(ConfigProvider::new(Arc::clone(&context))),
            },
            RegisteredToken {
                name: names.translation,
                provider: Box::new(TranslationProvider::new(Arc::clone(&context))),
            },
            RegisteredToken {
                name: names.dynamic,
                provider: Box::new(DynamicProvider::new(Arc::clone(&context))),
            },
            RegisteredToken {
                name: names.asset,
                provider: Box::new(AssetProvider::new(context)),
            },
        ];
        info!(tokens = ?tokens.iter().map(|token| token.name.as_str()).collect::<Vec<_>>(), "registered value providers");
        Self { tokens }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&dyn ValueProvider> {
        self.tokens
            .iter()
            .find(|token| token.name == name)
            .map(|token| token.provider.as_ref() as &dyn ValueProvider)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn ValueProvider + Send + 'static)> {
        self.tokens
            .iter_mut()
            .find(|token| token.name == name)
            .map(|token| token.provider.as_mut())
    }

    /// Runs `update_context` on every provider and returns the names of those
    /// that reported a change.
    pub fn refresh(&mut self) -> Vec<String> {
        let changed: Vec<String> = self
            .tokens
            .iter_mut()
            .filter_map(|token| token.provider.update_context().then(|| token.name.clone()))
            .collect();
        if !changed.is_empty() {
            debug!(?changed, "providers reported changes");
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
