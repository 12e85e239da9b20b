use std::sync::Arc;

use crossmod_types::ProviderError;
use serde_json::Value;
use tracing::debug;

use super::{
    TokenValues, ValueProvider,
    cache::ValueCache,
    input::{accept_token_input, validate_token_input},
};
use crate::{RuntimeContext, bridge::ExternalStateBridge};

const PROVIDER: &str = "config";

/// Reads fields from another component's structured config.
///
/// Input: `ComponentId, dotted.path`. String leaves containing commas yield
/// one value per comma-separated piece.
#[derive(Debug)]
pub struct ConfigProvider {
    bridge: ExternalStateBridge,
    cache: ValueCache<Option<Value>>,
}

impl ConfigProvider {
    pub fn new(context: Arc<RuntimeContext>) -> Self {
        Self {
            bridge: ExternalStateBridge::new(context),
            cache: ValueCache::new(),
        }
    }

    /// Number of `(component, key)` pairs observed so far.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl ValueProvider for ConfigProvider {
    fn can_have_multiple_values(&self, _input: Option<&str>) -> bool {
        true
    }

    fn try_validate_input(&self, input: Option<&str>) -> Result<(), ProviderError> {
        validate_token_input(self.bridge.context(), input).map(|_| ())
    }

    fn is_ready(&self) -> bool {
        self.bridge.context().has_components()
    }

    fn update_context(&mut self) -> bool {
        let bridge = &self.bridge;
        let changed = self.cache.refresh(|component, key| bridge.fetch_config(component, key));
        if changed > 0 {
            debug!(provider = PROVIDER, changed, "config values changed");
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
        self.cache
            .get_or_insert_with(&input.component, &input.key, || bridge.fetch_config(&input.component, &input.key))
            .as_ref()
            .map(TokenValues::from_json)
            .unwrap_or_default()
    }
}
