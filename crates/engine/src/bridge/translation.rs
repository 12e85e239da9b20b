use std::sync::Arc;

use crossmod_registry::TranslationSource;
use crossmod_types::{ComponentId, Locale, ProviderError};
use tracing::debug;

use super::{ExternalStateBridge, isolate, report_failure};

/// Localized string observed for one key, together with the locale it was
/// produced in.
///
/// A locale switch counts as a change even when the text happens to be equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    pub locale: Option<Locale>,
    pub text: Option<String>,
}

impl ExternalStateBridge {
    /// Locale-aware translation accessor of `component`.
    pub fn fetch_translation(&self, component: &ComponentId) -> Option<Arc<dyn TranslationSource>> {
        self.try_fetch_translation(component)
            .map_err(|error| report_failure(&error))
            .ok()
            .flatten()
    }

    fn try_fetch_translation(&self, component: &ComponentId) -> Result<Option<Arc<dyn TranslationSource>>, ProviderError> {
        let handle = self.component(component)?;
        let translations = isolate(component, "loading translations", || Ok(handle.translations()))?;
        if translations.is_none() {
            debug!(component = %component, "component ships no translations");
        }
        Ok(translations)
    }

    /// Current locale and localized string for `key`.
    pub fn fetch_translation_entry(&self, component: &ComponentId, key: &str) -> TranslationEntry {
        let Some(source) = self.fetch_translation(component) else {
            return TranslationEntry::default();
        };
        match isolate(component, "translating", || Ok((source.locale(), source.translate(key)))) {
            Ok((locale, text)) => {
                if text.is_none() {
                    debug!(component = %component, key, locale = %locale, "no translation for key");
                }
                TranslationEntry {
                    locale: Some(locale),
                    text,
                }
            }
            Err(error) => {
                report_failure(&error);
                TranslationEntry::default()
            }
        }
    }
}
