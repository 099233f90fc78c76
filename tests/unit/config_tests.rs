//! Config loading through the public API.

use std::sync::Arc;

use confscout::catalog::{InMemoryTagStore, PresentationType, TalkCatalog};
use confscout::config::{Config, PROJECT_CONFIG_FILE, SuggestConfig};
use confscout::error::{ErrorCode, ScoutError};
use confscout::test_utils::{RecordingObserver, sample_corpus};
use tempfile::TempDir;

#[test]
fn project_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(PROJECT_CONFIG_FILE),
        r#"
[catalog]
source = "data/talks.json"
presentation = "watchlist"

[suggest]
parallel_threshold = 128
max_results = 8

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = Config::load(None, temp.path()).unwrap();
    assert_eq!(
        config.catalog.require_source().unwrap(),
        std::path::Path::new("data/talks.json")
    );
    assert_eq!(config.catalog.presentation, PresentationType::Watchlist);
    assert_eq!(
        config.suggest,
        SuggestConfig {
            parallel_threshold: 128,
            max_results: Some(8),
        }
    );
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json);
}

#[test]
fn unknown_presentation_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    std::fs::write(&path, "[catalog]\npresentation = \"favourites\"\n").unwrap();

    let err = Config::load(Some(&path), temp.path()).unwrap_err();
    assert!(matches!(err, ScoutError::Config(_)));
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn missing_source_has_recovery_hint() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(None, temp.path()).unwrap();
    let err = config.catalog.require_source().unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigMissingRequired);
    assert!(err.suggestion().contains("CONFSCOUT_"));
}

#[test]
fn configured_catalogue_is_fetched_with_configured_presentation() {
    let temp = TempDir::new().unwrap();
    let catalogue = temp.path().join("talks.json");
    std::fs::write(&catalogue, serde_json::to_string(&sample_corpus()).unwrap()).unwrap();
    std::fs::write(
        temp.path().join(PROJECT_CONFIG_FILE),
        format!(
            "[catalog]\nsource = {:?}\npresentation = \"watchlist\"\n",
            catalogue.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load(None, temp.path()).unwrap();
    let tags = Arc::new(InMemoryTagStore::with_active(["ui"]));
    let mut catalog = TalkCatalog::new(tags).with_suggest_config(config.suggest.clone());
    let observer = RecordingObserver::new();
    catalog.subscribe(Box::new(observer.clone()));

    catalog.request_configured_fetch(&config.catalog).unwrap();
    assert!(catalog.wait_for_fetch());

    assert_eq!(catalog.snapshot().as_slice(), sample_corpus().as_slice());
    let view = observer.last_data().unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].talks.len(), 1);
    assert_eq!(view[0].talks[0].title, "SwiftUI layouts");
}
