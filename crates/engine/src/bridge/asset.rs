use crossmod_types::{AssetName, ComponentId, ProviderError};

use super::{ExternalStateBridge, isolate, report_failure};

impl ExternalStateBridge {
    /// Canonicalizes `path` through the content subsystem of `component`.
    pub fn fetch_internal_asset_name(&self, component: &ComponentId, path: &str) -> Option<AssetName> {
        self.try_fetch_internal_asset_name(component, path)
            .map_err(|error| report_failure(&error))
            .ok()
    }

    pub fn try_fetch_internal_asset_name(&self, component: &ComponentId, path: &str) -> Result<AssetName, ProviderError> {
        let handle = self.component(component)?;
        let Some(content) = isolate(component, "loading content helper", || Ok(handle.content()))? else {
            return Err(ProviderError::ExternalFailure {
                component: component.to_string(),
                operation: "loading content helper",
                message: "component has no content subsystem".to_string(),
            });
        };
        isolate(component, "resolving asset name", || content.internal_asset_name(path))
    }
}
