//! CLI command implementations.

pub mod open;
pub mod shell;

use crate::core::navigator::Navigator;
use crate::core::route::Route;
use crate::models::config::Config;
use crate::services::images::ImageUrls;
use crate::services::tmdb::{HttpTransport, TmdbClient};

/// Build a live navigator for `route` and run its first load.
pub(crate) async fn open_navigator(
    config: &Config,
    route: Route,
) -> crate::Result<Navigator<HttpTransport>> {
    let client = TmdbClient::from_config(&config.tmdb)?;
    let images = ImageUrls::new(&config.tmdb.image_base_url);
    Ok(Navigator::open(client, images, route).await)
}
