//! TMDB API preflight check.

use super::CheckResult;
use crate::models::config::TmdbConfig;
use crate::services::tmdb::TmdbClient;

/// Check if TMDB API is accessible with the configured credentials.
pub async fn check(config: &TmdbConfig) -> CheckResult {
    match TmdbClient::from_config(config) {
        Ok(client) => match client.verify_credentials().await {
            Ok(true) => CheckResult::ok("TMDB API", "connected"),
            Ok(false) => CheckResult::fail(
                "TMDB API",
                &crate::Error::TmdbCredentialsInvalid.to_string(),
                "Check TMDB_API_KEY / TMDB_ACCESS_TOKEN or the [tmdb] section of config.toml",
            ),
            Err(e) => CheckResult::fail(
                "TMDB API",
                &format!("connection failed ({})", e),
                "Check your network connection and TMDB_BASE_URL",
            ),
        },
        Err(_) => CheckResult::fail(
            "TMDB API",
            "credentials not configured",
            "Set TMDB_API_KEY or TMDB_ACCESS_TOKEN environment variable",
        ),
    }
}
