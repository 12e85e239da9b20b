//! Collaborator interfaces exposed by every installed component.

use std::{fmt::Debug, sync::Arc};

use crossmod_types::{AssetName, ComponentId, ComponentKind, Locale};
use serde_json::Value;
use thiserror::Error;

/// Failure reported by a component while serving a read.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The component's structured config document is malformed.
    #[error("malformed config document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid asset path '{0}'")]
    InvalidAssetPath(String),
    #[error("{0}")]
    Failed(String),
}

/// Read surface of an installed module or content pack.
pub trait Component: Debug + Send + Sync {
    fn id(&self) -> &ComponentId;

    fn kind(&self) -> ComponentKind;

    /// Reads the component's own structured configuration (`config.json`
    /// semantics). `Ok(None)` means the component has no configuration.
    fn read_config(&self) -> Result<Option<Value>, ComponentError>;

    /// Locale-aware string table, if the component ships translations.
    fn translations(&self) -> Option<Arc<dyn TranslationSource>>;

    /// Content-loading subsystem, if the component has one.
    fn content(&self) -> Option<Arc<dyn ContentResolver>>;
}

/// Locale-aware string lookup by flat key.
pub trait TranslationSource: Debug + Send + Sync {
    /// Locale currently used to answer lookups.
    fn locale(&self) -> Locale;

    /// Localized string for `key` in the current locale, or `None` when no
    /// table defines it.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Canonicalizes raw asset paths into a component's internal asset namespace.
pub trait ContentResolver: Debug + Send + Sync {
    fn internal_asset_name(&self, path: &str) -> Result<AssetName, ComponentError>;
}
