//! Registry of installed components (modules and content packs).
//!
//! The registry is populated once by the host integration and read by the
//! value providers for the rest of the session. Components are reached only
//! through the [`Component`] trait so providers never depend on how a module
//! or pack stores its config, translations, or assets.

pub mod component;
pub mod memory;
pub mod models;

pub use component::{Component, ComponentError, ContentResolver, TranslationSource};
pub use crossmod_types::{AssetName, ComponentId, ComponentKind, Locale};
pub use memory::{MemoryComponent, MemoryContent, MemoryTranslations};
pub use models::{ComponentRegistry, RegistryError};
