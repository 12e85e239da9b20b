//! Shared type definitions for the cross-component value providers.
//!
//! The identifiers defined here are passed between the registry, the external
//! state bridge, and the providers. They are deliberately thin wrappers around
//! strings so collaborators can construct them from whatever the host hands
//! over without conversion costs.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

pub mod error;
pub mod input;

pub use error::ProviderError;
pub use input::{InputArguments, TokenInput, split_delimited};

/// Unique identifier of an installed module or content pack.
///
/// Identifiers are trimmed and never empty. Comparison is exact (case
/// sensitive), matching how the registry keys components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    /// Builds an identifier from raw text, returning `None` when the trimmed
    /// text is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Wraps a segment produced by [`split_delimited`], which is already
    /// trimmed and non-empty.
    pub(crate) fn from_segment(segment: String) -> Self {
        debug_assert!(!segment.is_empty() && segment.trim() == segment);
        Self(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "component identifier cannot be empty".to_string())
    }
}

impl From<ComponentId> for String {
    fn from(value: ComponentId) -> Self {
        value.0
    }
}

/// Distinguishes code components from static data bundles.
///
/// Both kinds expose the same read surface (config, translations, assets);
/// the kind is informational and used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// A code component with its own settable state.
    Module,
    /// A static data bundle read by another component.
    ContentPack,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Module => f.write_str("module"),
            ComponentKind::ContentPack => f.write_str("content pack"),
        }
    }
}

/// Locale code used by translation sources (for example `"fr"` or `"pt-BR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Code of the fallback locale every translation table may provide.
    pub const DEFAULT_CODE: &'static str = "default";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT_CODE
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::DEFAULT_CODE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical, internally qualified asset identifier produced by a component's
/// content subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetName(String);

impl AssetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
