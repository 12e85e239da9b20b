//! Value providers registered with the host token engine.
//!
//! Modules:
//! - `value_provider`: The protocol the host drives
//! - `values`: Value lists returned to the host
//! - `input`: Shared `ComponentId, Key` validation
//! - `cache`: Last observed value per `(component, key)`
//! - `config`, `translation`, `asset`, `dynamic`: The four providers
//! - `set`: The providers bundled under their configured token names

mod asset;
mod cache;
mod config;
mod dynamic;
mod input;
mod set;
mod translation;
mod value_provider;
mod values;

pub use asset::AssetProvider;
pub use config::ConfigProvider;
pub use dynamic::DynamicProvider;
pub use set::{ProviderSet, RegisteredToken};
pub use translation::TranslationProvider;
pub use value_provider::ValueProvider;
pub use values::TokenValues;
