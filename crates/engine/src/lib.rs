//! # Crossmod Engine
//!
//! Value providers that let one component's content read live state owned
//! by another component: structured config fields, localized strings,
//! internal asset names, and tokens other components registered with the
//! host engine.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use crossmod_engine::{ProviderSet, RuntimeContext, host::MemoryHostEngine};
//! use crossmod_registry::{Component, ComponentRegistry, MemoryComponent};
//! use crossmod_types::ComponentId;
//! use crossmod_util::BridgeSettings;
//!
//! let id = ComponentId::parse("Foo.Bar").expect("valid id");
//! let component: Arc<dyn Component> =
//!     Arc::new(MemoryComponent::module(id).with_config(serde_json::json!({ "volume": { "music": "10,20" } })));
//! let registry = Arc::new(ComponentRegistry::with_components([component])?);
//! let owner = ComponentId::parse("Crossmod.Tokens").expect("valid id");
//! let context = Arc::new(RuntimeContext::new(owner, registry, Arc::new(MemoryHostEngine::new()), BridgeSettings::default()));
//!
//! let mut providers = ProviderSet::new(context);
//! let config = providers.get_mut("Config").expect("config token");
//! assert_eq!(config.get_values(Some("Foo.Bar, volume.music")).into_vec(), vec!["10", "20"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`provider`**: The value provider protocol and its four implementations
//! - **`bridge`**: Fault-isolated reads of other components' state
//! - **`field_paths`**: Dotted path resolution over JSON config trees
//! - **`host`**: Seams onto the host token engine
//! - **`context`**: Session-scoped registry, host, and settings

pub mod bridge;
pub mod context;
pub mod field_paths;
pub mod host;
pub mod provider;

pub use bridge::{DynamicDelegateAdapter, ExternalStateBridge, TranslationEntry};
pub use context::RuntimeContext;
pub use provider::{
    AssetProvider, ConfigProvider, DynamicProvider, ProviderSet, RegisteredToken, TokenValues, TranslationProvider, ValueProvider,
};
