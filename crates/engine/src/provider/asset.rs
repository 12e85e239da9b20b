use std::sync::Arc;

use crossmod_types::{AssetName, ProviderError};
use tracing::debug;

use super::{
    TokenValues, ValueProvider,
    cache::ValueCache,
    input::{accept_token_input, validate_token_input},
};
use crate::{RuntimeContext, bridge::ExternalStateBridge};

const PROVIDER: &str = "asset";

/// Resolves a raw asset path into another component's internal asset name.
///
/// Input: `ComponentId, relative/asset/path.png`.
///
/// An asset name is one value, so [`can_have_multiple_values`] is false. Like
/// every other string this provider hands back, the name still goes through
/// the comma split. Content subsystems do not put commas in asset names, so
/// exactly one value is returned in practice.
///
/// [`can_have_multiple_values`]: ValueProvider::can_have_multiple_values
#[derive(Debug)]
pub struct AssetProvider {
    bridge: ExternalStateBridge,
    cache: ValueCache<Option<AssetName>>,
}

impl AssetProvider {
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

impl ValueProvider for AssetProvider {
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
            .refresh(|component, path| bridge.fetch_internal_asset_name(component, path));
        if changed > 0 {
            debug!(provider = PROVIDER, changed, "asset names changed");
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
            .get_or_insert_with(&input.component, &input.key, || {
                bridge.fetch_internal_asset_name(&input.component, &input.key)
            })
            .as_ref()
            .map(|name| TokenValues::from_delimited(name.as_str()))
            .unwrap_or_default()
    }
}
