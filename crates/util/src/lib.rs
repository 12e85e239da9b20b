//! Ambient helpers shared by the registry and engine crates: settings file
//! loading, tracing initialization, and path normalization.

pub mod logging;
pub mod path_processing;
pub mod settings;

pub use logging::init_tracing;
pub use path_processing::{expand_tilde, normalize_asset_path};
pub use settings::{BridgeSettings, DynamicChangeDetection, SettingsError, TokenNames, default_settings_path};
