//! Integration tests for configuration loading.

use cineverse::models::config::load_config_from;
use cineverse::Error;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_config_from(&temp_dir.path().join("config.toml")).unwrap();

    assert!(config.tmdb.api_key.is_none());
    assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.tmdb.region, "IN");
    assert_eq!(config.tmdb.fallback_region, "US");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[tmdb]\napi_key = \"abc123\"\nregion = \"GB\"\n").unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.tmdb.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.tmdb.region, "GB");
    assert_eq!(config.tmdb.language, "en-US");
}

#[test]
fn test_unparseable_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[tmdb\napi_key = ").unwrap();

    match load_config_from(&path) {
        Err(Error::Config { path: reported, .. }) => {
            assert!(reported.ends_with("config.toml"));
        }
        other => panic!("Expected config error, got {:?}", other),
    }
}
