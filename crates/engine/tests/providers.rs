use std::sync::{Arc, Once};

use crossmod_engine::{
    AssetProvider, ConfigProvider, DynamicProvider, ProviderSet, RuntimeContext, TranslationProvider, ValueProvider,
    host::{FnTokenHandle, HostEngine, MemoryHostEngine, MemoryToken, NullHostEngine, TokenContext},
};
use crossmod_registry::{
    Component, ComponentError, ComponentRegistry, ContentResolver, MemoryComponent, MemoryTranslations, TranslationSource,
};
use crossmod_types::{ComponentId, ComponentKind, InputArguments, Locale, ProviderError};
use crossmod_util::{BridgeSettings, DynamicChangeDetection};
use serde_json::{Value, json};

static TRACING: Once = Once::new();

const OWNER: &str = "Crossmod.Tokens";

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

fn id(raw: &str) -> ComponentId {
    ComponentId::parse(raw).unwrap()
}

fn context_with(components: Vec<Arc<dyn Component>>, host: Arc<dyn HostEngine>, settings: BridgeSettings) -> Arc<RuntimeContext> {
    init_tracing();
    let registry = ComponentRegistry::with_components(components).unwrap();
    Arc::new(RuntimeContext::new(id(OWNER), Arc::new(registry), host, settings))
}

fn context(components: Vec<Arc<dyn Component>>) -> Arc<RuntimeContext> {
    context_with(components, Arc::new(NullHostEngine), BridgeSettings::default())
}

fn values(provider: &mut dyn ValueProvider, input: &str) -> Vec<String> {
    provider.get_values(Some(input)).into_vec()
}

/// Component whose every collaborator call panics.
#[derive(Debug)]
struct PanickingComponent {
    id: ComponentId,
}

impl Component for PanickingComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Module
    }

    fn read_config(&self) -> Result<Option<Value>, ComponentError> {
        panic!("config reader exploded")
    }

    fn translations(&self) -> Option<Arc<dyn TranslationSource>> {
        panic!("translation helper exploded")
    }

    fn content(&self) -> Option<Arc<dyn ContentResolver>> {
        panic!("content helper exploded")
    }
}

#[test]
fn every_provider_rejects_wrong_arity() {
    let context = context(vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))]);
    let providers: Vec<Box<dyn ValueProvider>> = vec![
        Box::new(ConfigProvider::new(Arc::clone(&context))),
        Box::new(TranslationProvider::new(Arc::clone(&context))),
        Box::new(AssetProvider::new(Arc::clone(&context))),
        Box::new(DynamicProvider::new(context)),
    ];
    for provider in &providers {
        assert!(provider.allows_input());
        assert!(provider.requires_input());
        for input in [None, Some(""), Some("Foo.Bar"), Some("Foo.Bar,a,b"), Some(" , ,")] {
            let error = provider.try_validate_input(input).unwrap_err();
            assert!(matches!(error, ProviderError::InvalidArity { .. }), "{provider:?} accepted {input:?}");
            assert!(error.is_validation_error());
        }
    }
}

#[test]
fn every_provider_rejects_unknown_component() {
    let context = context(vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))]);
    let mut providers: Vec<Box<dyn ValueProvider>> = vec![
        Box::new(ConfigProvider::new(Arc::clone(&context))),
        Box::new(TranslationProvider::new(Arc::clone(&context))),
        Box::new(AssetProvider::new(Arc::clone(&context))),
        Box::new(DynamicProvider::new(context)),
    ];
    for provider in &mut providers {
        let error = provider.try_validate_input(Some("Missing.Id, key")).unwrap_err();
        assert_eq!(error, ProviderError::UnknownComponent("Missing.Id".into()));
        assert!(error.to_string().contains("Missing.Id"));
        assert!(provider.get_values(Some("Missing.Id, key")).is_empty());
        assert!(provider.try_validate_input(Some("Foo.Bar, key")).is_ok());
    }
}

#[test]
fn config_splits_nested_string_into_values() {
    let component = MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "volume": { "music": "10,20" } }));
    let mut provider = ConfigProvider::new(context(vec![Arc::new(component)]));

    assert!(provider.is_ready());
    assert!(provider.can_have_multiple_values(Some("Foo.Bar, volume.music")));
    assert_eq!(values(&mut provider, "Foo.Bar, volume.music"), vec!["10", "20"]);
}

#[test]
fn config_values_split_on_comma_and_trim() {
    let component = MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "list": "a, b,c", "count": 3, "flag": true }));
    let mut provider = ConfigProvider::new(context(vec![Arc::new(component)]));

    assert_eq!(values(&mut provider, "Foo.Bar, list"), vec!["a", "b", "c"]);
    assert_eq!(values(&mut provider, "Foo.Bar, count"), vec!["3"]);
    assert_eq!(values(&mut provider, "Foo.Bar, flag"), vec!["true"]);
}

#[test]
fn config_missing_path_yields_nothing() {
    let component = MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "volume": { "music": 10 } }));
    let mut provider = ConfigProvider::new(context(vec![Arc::new(component)]));

    assert!(values(&mut provider, "Foo.Bar, volume.sfx").is_empty());
    assert!(values(&mut provider, "Foo.Bar, volume.music.level").is_empty());
}

#[test]
fn config_reads_are_idempotent_between_refreshes() {
    let component = Arc::new(MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "speed": 1 })));
    let mut provider = ConfigProvider::new(context(vec![component.clone()]));

    assert_eq!(values(&mut provider, "Foo.Bar, speed"), vec!["1"]);
    component.set_config(json!({ "speed": 2 }));
    assert_eq!(values(&mut provider, "Foo.Bar, speed"), vec!["1"]);
    assert_eq!(provider.cached_entries(), 1);
}

#[test]
fn config_change_is_reported_exactly_once() {
    let component = Arc::new(MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "speed": 1, "size": 4 })));
    let mut provider = ConfigProvider::new(context(vec![component.clone()]));
    assert_eq!(values(&mut provider, "Foo.Bar, speed"), vec!["1"]);
    assert_eq!(values(&mut provider, "Foo.Bar, size"), vec!["4"]);

    assert!(!provider.update_context());

    component.set_config(json!({ "speed": 2, "size": 5 }));
    assert!(provider.update_context());
    assert!(!provider.update_context());
    assert_eq!(values(&mut provider, "Foo.Bar, speed"), vec!["2"]);
    assert_eq!(values(&mut provider, "Foo.Bar, size"), vec!["5"]);
}

#[test]
fn config_refuses_to_read_owner() {
    let owner = MemoryComponent::module(id(OWNER)).with_config(json!({ "secret": "x" }));
    let mut provider = ConfigProvider::new(context(vec![Arc::new(owner)]));

    assert!(provider.try_validate_input(Some("Crossmod.Tokens, secret")).is_ok());
    assert!(values(&mut provider, "Crossmod.Tokens, secret").is_empty());
}

#[test]
fn config_owner_override_comes_from_settings() {
    let renamed = MemoryComponent::module(id("Me.Tokens")).with_config(json!({ "secret": "x" }));
    let original = MemoryComponent::module(id(OWNER)).with_config(json!({ "secret": "y" }));
    let settings = BridgeSettings {
        owner_id: Some("Me.Tokens".into()),
        ..BridgeSettings::default()
    };
    let mut provider = ConfigProvider::new(context_with(
        vec![Arc::new(renamed), Arc::new(original)],
        Arc::new(NullHostEngine),
        settings,
    ));

    assert!(values(&mut provider, "Me.Tokens, secret").is_empty());
    assert_eq!(values(&mut provider, "Crossmod.Tokens, secret"), vec!["y"]);
}

#[test]
fn malformed_config_does_not_affect_other_components() {
    let broken = Arc::new(MemoryComponent::module(id("Broken.Mod")));
    broken.set_config_text(Some("{ not json".into()));
    let healthy = MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "speed": 1 }));
    let mut provider = ConfigProvider::new(context(vec![broken.clone(), Arc::new(healthy)]));

    assert!(values(&mut provider, "Broken.Mod, speed").is_empty());
    assert_eq!(values(&mut provider, "Foo.Bar, speed"), vec!["1"]);

    broken.set_config(json!({ "speed": 9 }));
    assert!(provider.update_context());
    assert_eq!(values(&mut provider, "Broken.Mod, speed"), vec!["9"]);
}

#[test]
fn panicking_component_is_isolated() {
    let panicking: Arc<dyn Component> = Arc::new(PanickingComponent { id: id("Panic.Mod") });
    let healthy = MemoryComponent::module(id("Foo.Bar"))
        .with_config(json!({ "speed": 1 }))
        .with_translations(MemoryTranslations::new().with_entry("default", "greeting", "Hello"));
    let context = context(vec![panicking, Arc::new(healthy)]);

    let mut config = ConfigProvider::new(Arc::clone(&context));
    let mut translation = TranslationProvider::new(Arc::clone(&context));
    let mut asset = AssetProvider::new(context);

    assert!(values(&mut config, "Panic.Mod, speed").is_empty());
    assert!(values(&mut translation, "Panic.Mod, greeting").is_empty());
    assert!(values(&mut asset, "Panic.Mod, a.png").is_empty());
    assert!(!config.update_context());
    assert!(!translation.update_context());
    assert!(!asset.update_context());

    assert_eq!(values(&mut config, "Foo.Bar, speed"), vec!["1"]);
    assert_eq!(values(&mut translation, "Foo.Bar, greeting"), vec!["Hello"]);
}

#[test]
fn translation_returns_whole_string_and_tracks_locale() {
    let translations = MemoryTranslations::new()
        .with_entry("default", "greeting", "Hello, friend")
        .with_entry("fr", "greeting", "Bonjour, ami");
    let component = Arc::new(MemoryComponent::module(id("Foo.Bar")).with_translations(translations));
    let mut provider = TranslationProvider::new(context(vec![component.clone()]));

    assert!(!provider.can_have_multiple_values(Some("Foo.Bar, greeting")));
    assert_eq!(values(&mut provider, "Foo.Bar, greeting"), vec!["Hello, friend"]);
    assert!(values(&mut provider, "Foo.Bar, farewell").is_empty());
    assert!(!provider.update_context());

    component.translation_table().unwrap().set_locale(Locale::new("fr"));
    assert!(provider.update_context());
    assert!(!provider.update_context());
    assert_eq!(values(&mut provider, "Foo.Bar, greeting"), vec!["Bonjour, ami"]);
}

#[test]
fn translation_locale_switch_with_identical_text_is_a_change() {
    let translations = MemoryTranslations::new().with_entry("default", "name", "Pierre");
    let component = Arc::new(MemoryComponent::module(id("Foo.Bar")).with_translations(translations));
    let mut provider = TranslationProvider::new(context(vec![component.clone()]));
    assert_eq!(values(&mut provider, "Foo.Bar, name"), vec!["Pierre"]);

    component.translation_table().unwrap().set_locale(Locale::new("de"));
    assert!(provider.update_context());
    assert_eq!(values(&mut provider, "Foo.Bar, name"), vec!["Pierre"]);
}

#[test]
fn asset_resolves_internal_name() {
    let pack = MemoryComponent::content_pack(id("Foo.Pack"));
    let bare = MemoryComponent::module(id("No.Content")).without_content();
    let mut provider = AssetProvider::new(context(vec![Arc::new(pack), Arc::new(bare)]));

    assert!(!provider.can_have_multiple_values(Some("Foo.Pack, assets/a.png")));
    assert_eq!(
        values(&mut provider, r"Foo.Pack, assets\Portrait.png"),
        vec!["SMAPI/foo.pack/assets/Portrait.png"]
    );
    assert!(values(&mut provider, "Foo.Pack, ../escape.png").is_empty());
    assert!(values(&mut provider, "No.Content, a.png").is_empty());
    assert!(!provider.update_context());
}

#[test]
fn asset_change_is_reported_exactly_once() {
    let pack = Arc::new(MemoryComponent::content_pack(id("Foo.Pack")));
    let mut provider = AssetProvider::new(context(vec![pack.clone()]));
    assert_eq!(values(&mut provider, "Foo.Pack, assets/a.png"), vec!["SMAPI/foo.pack/assets/a.png"]);
    assert!(!provider.update_context());

    pack.content_resolver().unwrap().set_namespace("foo.pack.v2");
    assert!(provider.update_context());
    assert!(!provider.update_context());
    assert_eq!(values(&mut provider, "Foo.Pack, assets/a.png"), vec!["SMAPI/foo.pack.v2/assets/a.png"]);
}

#[test]
fn dynamic_requires_ready_host() {
    let host = Arc::new(MemoryHostEngine::new());
    let mut provider = DynamicProvider::new(context_with(
        vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))],
        host.clone(),
        BridgeSettings::default(),
    ));

    assert!(!provider.is_ready());
    assert!(values(&mut provider, "Foo.Bar, Speed").is_empty());

    host.set_ready(true);
    assert!(provider.is_ready());
}

#[derive(Debug)]
struct PanickingHost;

impl HostEngine for PanickingHost {
    fn is_ready(&self) -> bool {
        panic!("readiness check exploded")
    }

    fn component_token_context(&self, _component: &ComponentId) -> Option<Arc<dyn TokenContext>> {
        panic!("token context lookup exploded")
    }
}

#[test]
fn dynamic_panicking_host_is_not_ready() {
    let mut provider = DynamicProvider::new(context_with(
        vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))],
        Arc::new(PanickingHost),
        BridgeSettings::default(),
    ));

    assert!(!provider.is_ready());
    assert!(values(&mut provider, "Foo.Bar, Speed").is_empty());
    assert!(!provider.update_context());
}

#[test]
fn dynamic_missing_token_yields_nothing() {
    let host = Arc::new(MemoryHostEngine::new());
    host.set_ready(true);
    let mut provider = DynamicProvider::new(context_with(
        vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))],
        host.clone(),
        BridgeSettings::default(),
    ));

    assert!(values(&mut provider, "Foo.Bar, Speed").is_empty());
    host.context_for(&id("Foo.Bar"));
    assert!(values(&mut provider, "Foo.Bar, Speed").is_empty());
}

#[test]
fn dynamic_reads_foreign_token_and_detects_changes() {
    let host = Arc::new(MemoryHostEngine::new());
    host.set_ready(true);
    let token = Arc::new(MemoryToken::new("Speed", ["fast, slow", "medium"]));
    host.context_for(&id("Foo.Bar")).define(token.clone());
    let mut provider = DynamicProvider::new(context_with(
        vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))],
        host,
        BridgeSettings::default(),
    ));

    assert!(provider.can_have_multiple_values(Some("Foo.Bar, Speed")));
    assert_eq!(values(&mut provider, "Foo.Bar, Speed"), vec!["fast", "slow", "medium"]);
    assert!(!provider.update_context());

    token.set_values(["stopped"]);
    assert!(provider.update_context());
    assert!(!provider.update_context());
    assert_eq!(values(&mut provider, "Foo.Bar, Speed"), vec!["stopped"]);
}

#[test]
fn dynamic_always_mode_reports_every_refresh() {
    let host = Arc::new(MemoryHostEngine::new());
    host.set_ready(true);
    host.context_for(&id("Foo.Bar")).define(Arc::new(MemoryToken::new("Speed", ["fast"])));
    let settings = BridgeSettings {
        dynamic_change_detection: DynamicChangeDetection::Always,
        ..BridgeSettings::default()
    };
    let mut provider = DynamicProvider::new(context_with(vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))], host, settings));

    assert_eq!(values(&mut provider, "Foo.Bar, Speed"), vec!["fast"]);
    assert!(provider.update_context());
    assert!(provider.update_context());
}

#[test]
fn dynamic_failing_token_is_isolated() {
    let host = Arc::new(MemoryHostEngine::new());
    host.set_ready(true);
    let token_context = host.context_for(&id("Foo.Bar"));
    token_context.define(Arc::new(FnTokenHandle::new("Broken", |_: &InputArguments| Err(ComponentError::Failed("boom".into())))));
    token_context.define(Arc::new(FnTokenHandle::new("Panics", |_: &InputArguments| -> Result<Vec<String>, ComponentError> {
        panic!("token exploded")
    })));
    token_context.define(Arc::new(MemoryToken::new("Speed", ["fast"])));
    let mut provider = DynamicProvider::new(context_with(
        vec![Arc::new(MemoryComponent::module(id("Foo.Bar")))],
        host,
        BridgeSettings::default(),
    ));

    assert!(values(&mut provider, "Foo.Bar, Broken").is_empty());
    assert!(values(&mut provider, "Foo.Bar, Panics").is_empty());
    assert_eq!(values(&mut provider, "Foo.Bar, Speed"), vec!["fast"]);
    assert!(!provider.update_context());
}

#[test]
fn providers_are_not_ready_without_components() {
    let context = context(Vec::new());
    let mut config = ConfigProvider::new(Arc::clone(&context));
    let translation = TranslationProvider::new(Arc::clone(&context));
    let asset = AssetProvider::new(context);

    assert!(!config.is_ready());
    assert!(!translation.is_ready());
    assert!(!asset.is_ready());
    assert!(config.get_values(Some("Foo.Bar, speed")).is_empty());
    assert_eq!(config.cached_entries(), 0);
}

#[test]
fn provider_set_uses_configured_names_and_reports_changes() {
    let component = Arc::new(MemoryComponent::module(id("Foo.Bar")).with_config(json!({ "speed": 1 })));
    let mut settings = BridgeSettings::default();
    settings.token_names.config = "ModConfig".into();
    let mut providers = ProviderSet::new(context_with(vec![component.clone()], Arc::new(NullHostEngine), settings));

    assert_eq!(providers.len(), 4);
    assert_eq!(providers.names().collect::<Vec<_>>(), vec!["ModConfig", "Translation", "Dynamic", "Asset"]);
    assert!(providers.get("Config").is_none());

    let config = providers.get_mut("ModConfig").unwrap();
    assert_eq!(config.get_values(Some("Foo.Bar, speed")).into_vec(), vec!["1"]);
    assert!(providers.refresh().is_empty());

    component.set_config(json!({ "speed": 2 }));
    assert_eq!(providers.refresh(), vec!["ModConfig"]);
    assert!(providers.refresh().is_empty());
}
