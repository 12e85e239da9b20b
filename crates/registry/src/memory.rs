//! In-memory component implementations.
//!
//! Hosts that already hold materialized component data can register these
//! directly. Every piece of state sits behind an `RwLock` so the owning
//! component can change its config, locale, or translations while providers
//! keep observing it.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crossmod_types::{AssetName, ComponentId, ComponentKind, Locale};
use crossmod_util::normalize_asset_path;
use serde_json::Value;

use crate::{Component, ComponentError, ContentResolver, TranslationSource};

/// Prefix of every internal asset name.
pub const INTERNAL_ASSET_PREFIX: &str = "SMAPI";

/// Module or content pack whose state lives in memory.
///
/// The config document is kept as raw JSON text and parsed on every read,
/// mirroring a `config.json` file that the owner may rewrite at any time.
#[derive(Debug)]
pub struct MemoryComponent {
    id: ComponentId,
    kind: ComponentKind,
    config_text: RwLock<Option<String>>,
    translations: Option<Arc<MemoryTranslations>>,
    content: Option<Arc<MemoryContent>>,
}

impl MemoryComponent {
    /// Creates a component with a content subsystem and no config or
    /// translations.
    pub fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            content: Some(Arc::new(MemoryContent::new(id.clone()))),
            id,
            kind,
            config_text: RwLock::new(None),
            translations: None,
        }
    }

    pub fn module(id: ComponentId) -> Self {
        Self::new(id, ComponentKind::Module)
    }

    pub fn content_pack(id: ComponentId) -> Self {
        Self::new(id, ComponentKind::ContentPack)
    }

    pub fn with_config(self, config: Value) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_translations(mut self, translations: MemoryTranslations) -> Self {
        self.translations = Some(Arc::new(translations));
        self
    }

    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    /// Replaces the config document.
    pub fn set_config(&self, config: Value) {
        self.set_config_text(Some(config.to_string()));
    }

    /// Replaces the raw config text; `None` removes the config entirely.
    pub fn set_config_text(&self, text: Option<String>) {
        *self.config_text.write().expect("config lock poisoned") = text;
    }

    pub fn translation_table(&self) -> Option<&Arc<MemoryTranslations>> {
        self.translations.as_ref()
    }

    pub fn content_resolver(&self) -> Option<&Arc<MemoryContent>> {
        self.content.as_ref()
    }
}

impl Component for MemoryComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn read_config(&self) -> Result<Option<Value>, ComponentError> {
        let text = self.config_text.read().expect("config lock poisoned");
        match text.as_deref() {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn translations(&self) -> Option<Arc<dyn TranslationSource>> {
        self.translations
            .as_ref()
            .map(|translations| Arc::clone(translations) as Arc<dyn TranslationSource>)
    }

    fn content(&self) -> Option<Arc<dyn ContentResolver>> {
        self.content.as_ref().map(|content| Arc::clone(content) as Arc<dyn ContentResolver>)
    }
}

/// Translation tables keyed by locale with a switchable current locale.
///
/// Lookups fall back to the `default` table when the current locale does not
/// define a key.
#[derive(Debug, Default)]
pub struct MemoryTranslations {
    locale: RwLock<Locale>,
    tables: RwLock<HashMap<Locale, HashMap<String, String>>>,
}

impl MemoryTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, locale: &str, key: &str, text: &str) -> Self {
        self.insert(locale, key, text);
        self
    }

    pub fn insert(&self, locale: &str, key: &str, text: &str) {
        self.tables
            .write()
            .expect("translation lock poisoned")
            .entry(Locale::new(locale))
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn set_locale(&self, locale: Locale) {
        *self.locale.write().expect("translation lock poisoned") = locale;
    }
}

impl TranslationSource for MemoryTranslations {
    fn locale(&self) -> Locale {
        self.locale.read().expect("translation lock poisoned").clone()
    }

    fn translate(&self, key: &str) -> Option<String> {
        let locale = self.locale();
        let tables = self.tables.read().expect("translation lock poisoned");
        tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .or_else(|| tables.get(&Locale::default()).and_then(|table| table.get(key)))
            .cloned()
    }
}

/// Content subsystem that qualifies asset paths with a namespace, the
/// lowercased owner id unless changed.
///
/// `assets\\Portrait.png` owned by `Foo.Bar` becomes
/// `SMAPI/foo.bar/assets/Portrait.png`.
#[derive(Debug)]
pub struct MemoryContent {
    namespace: RwLock<String>,
}

impl MemoryContent {
    pub fn new(owner: ComponentId) -> Self {
        Self {
            namespace: RwLock::new(owner.as_str().to_lowercase()),
        }
    }

    /// Replaces the namespace, as when the owner is reloaded under another
    /// content root.
    pub fn set_namespace(&self, namespace: impl Into<String>) {
        *self.namespace.write().expect("content lock poisoned") = namespace.into();
    }
}

impl ContentResolver for MemoryContent {
    fn internal_asset_name(&self, path: &str) -> Result<AssetName, ComponentError> {
        let normalized = normalize_asset_path(path).ok_or_else(|| ComponentError::InvalidAssetPath(path.to_string()))?;
        Ok(AssetName::new(format!(
            "{}/{}/{}",
            INTERNAL_ASSET_PREFIX,
            self.namespace.read().expect("content lock poisoned"),
            normalized
        )))
    }
}
