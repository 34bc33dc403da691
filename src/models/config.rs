//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// v3 API key, sent as a query parameter.
    pub api_key: Option<String>,
    /// v4 read access token, sent as a bearer header.
    pub access_token: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Image CDN base, sizes are appended to it.
    pub image_base_url: String,
    /// Language for responses.
    pub language: String,
    /// Watch-provider region tried first.
    pub region: String,
    /// Watch-provider region used when `region` has no offers.
    pub fallback_region: String,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            access_token: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            language: "en-US".to_string(),
            region: "IN".to_string(),
            fallback_region: "US".to_string(),
        }
    }
}

impl TmdbConfig {
    /// Overlay `TMDB_*` environment variables on top of file values.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("TMDB_API_KEY").filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(token) = lookup("TMDB_ACCESS_TOKEN").filter(|v| !v.is_empty()) {
            self.access_token = Some(token);
        }
        if let Some(url) = lookup("TMDB_BASE_URL").filter(|v| !v.is_empty()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(region) = lookup("TMDB_REGION").filter(|v| !v.is_empty()) {
            self.region = region;
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cineverse")
}

/// Default location of `config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from a specific file.
///
/// A missing file yields the defaults; a file that exists but does not
/// parse is an error rather than being silently ignored.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load configuration from the default location plus environment overrides.
pub fn load_config() -> Result<Config> {
    let mut config = load_config_from(&default_config_path())?;
    config.tmdb.apply_env();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides_file_values() {
        let mut tmdb = TmdbConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [
            ("TMDB_API_KEY", "from-env"),
            ("TMDB_BASE_URL", "http://localhost:9000/3/"),
            ("TMDB_ACCESS_TOKEN", ""),
        ]
        .into_iter()
        .collect();

        tmdb.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(tmdb.api_key.as_deref(), Some("from-env"));
        assert_eq!(tmdb.base_url, "http://localhost:9000/3");
        // Empty values are ignored
        assert!(tmdb.access_token.is_none());
        assert_eq!(tmdb.region, "IN");
    }
}
