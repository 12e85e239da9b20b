use std::sync::Arc;

use crossmod_types::ProviderError;
use tracing::debug;

use super::{
    TokenValues, ValueProvider,
    cache::ValueCache,
    input::{accept_token_input, validate_token_input},
};
use crate::{
    RuntimeContext,
    bridge::{ExternalStateBridge, TranslationEntry},
};

const PROVIDER: &str = "translation";

/// Reads localized strings from another component's translation tables.
///
/// Input: `ComponentId, key`. The string is returned whole (translations
/// routinely contain commas). A locale switch is reported as a change.
#[derive(Debug)]
pub struct TranslationProvider {
    bridge: ExternalStateBridge,
    cache: ValueCache<TranslationEntry>,
}

impl TranslationProvider {
    pub fn new(context: Arc<RuntimeContext>) -> Self {
        Self {
            bridge: ExternalStateBridge::new(context),
            cache: ValueCache::new(),
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl ValueProvider for TranslationProvider {
    fn can_have_multiple_values(&self, _input: Option<&str>) -> bool {
        false
    }

    fn try_validate_input(&self, input: Option<&str>) -> Result<(), ProviderError> {
        validate_token_input(self.bridge.context(), input).map(|_| ())
    }

    fn is_ready(&self) -> bool {
        self.bridge.context().has_components()
    }

    fn update_context(&mut self) -> bool {
        let bridge = &self.bridge;
        let changed = self
            .cache
            .refresh(|component, key| bridge.fetch_translation_entry(component, key));
        if changed > 0 {
            debug!(provider = PROVIDER, changed, "translations changed");
        }
        changed > 0
    }

    fn get_values(&mut self, input: Option<&str>) -> TokenValues {
        if !self.is_ready() {
            return TokenValues::empty();
        }
        let Some(input) = accept_token_input(PROVIDER, self.bridge.context(), input) else {
            return TokenValues::empty();
        };
        let bridge = &self.bridge;
        let entry = self.cache.get_or_insert_with(&input.component, &input.key, || {
            bridge.fetch_translation_entry(&input.component, &input.key)
        });
        entry.text.iter().cloned().collect()
    }
}
