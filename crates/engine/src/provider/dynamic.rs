use std::sync::Arc;

use crossmod_types::{ProviderError, split_delimited};
use crossmod_util::DynamicChangeDetection;
use tracing::debug;

use super::{
    TokenValues, ValueProvider,
    cache::ValueCache,
    input::{accept_token_input, validate_token_input},
};
use crate::{RuntimeContext, bridge::ExternalStateBridge};

const PROVIDER: &str = "dynamic";

/// Re-exposes a token that another component defined inside the host engine.
///
/// Input: `ComponentId, TokenName`. The foreign token is invoked through
/// [`DynamicDelegateAdapter`](crate::bridge::DynamicDelegateAdapter) with
/// empty input.
#[derive(Debug)]
pub struct DynamicProvider {
    bridge: ExternalStateBridge,
    cache: ValueCache<Vec<String>>,
    change_detection: DynamicChangeDetection,
}

impl DynamicProvider {
    pub fn new(context: Arc<RuntimeContext>) -> Self {
        let change_detection = context.settings().dynamic_change_detection;
        Self {
            bridge: ExternalStateBridge::new(context),
            cache: ValueCache::new(),
            change_detection,
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl ValueProvider for DynamicProvider {
    fn can_have_multiple_values(&self, _input: Option<&str>) -> bool {
        true
    }

    fn try_validate_input(&self, input: Option<&str>) -> Result<(), ProviderError> {
        validate_token_input(self.bridge.context(), input).map(|_| ())
    }

    fn is_ready(&self) -> bool {
        self.bridge.context().has_components() && self.bridge.host_is_ready()
    }

    fn update_context(&mut self) -> bool {
        let bridge = &self.bridge;
        let changed = self
            .cache
            .refresh(|component, token| bridge.fetch_dynamic_values(component, token));
        if changed > 0 {
            debug!(provider = PROVIDER, changed, "dynamic token values changed");
        }
        match self.change_detection {
            DynamicChangeDetection::Compare => changed > 0,
            DynamicChangeDetection::Always => true,
        }
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
            .get_or_insert_with(&input.component, &input.key, || {
                bridge.fetch_dynamic_values(&input.component, &input.key)
            })
            .iter()
            .flat_map(|value| split_delimited(value))
            .map(str::to_string)
            .collect()
    }
}
