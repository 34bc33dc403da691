//! Open command implementation.

use crate::core::navigator::Navigator;
use crate::core::page_state::BrowseMode;
use crate::core::route::Route;
use crate::models::config::Config;
use crate::services::tmdb::Transport;
use anyhow::{bail, Result};

/// Page controls requested on the command line.
#[derive(Debug, Default, Clone)]
pub struct OpenOptions {
    pub mode: Option<String>,
    pub genre: Option<String>,
    pub page: Option<u32>,
    pub season: Option<u32>,
}

/// Execute open command: render one page and exit.
pub async fn execute_open(config: &Config, route: &str, options: OpenOptions) -> Result<()> {
    let route: Route = route.parse()?;
    let mut navigator = super::open_navigator(config, route).await?;
    apply_options(&mut navigator, &options).await?;
    println!("{}", navigator.render());
    Ok(())
}

/// Replay the requested controls the way a user would press them.
pub async fn apply_options<T: Transport>(
    navigator: &mut Navigator<T>,
    options: &OpenOptions,
) -> Result<()> {
    if let Some(mode) = &options.mode {
        let mode: BrowseMode = mode.parse()?;
        if !navigator.select_mode(mode).await {
            bail!("Mode '{}' is not available on {}", mode.label(), navigator.route());
        }
    }

    if let Some(genre) = &options.genre {
        if !navigator.select_genre(genre).await {
            bail!("Unknown genre '{}' (genre mode only)", genre);
        }
    }

    if let Some(page) = options.page {
        if !navigator.jump_to_page(page).await {
            bail!("Page {} is out of range", page);
        }
    }

    if let Some(season) = options.season {
        if !navigator.toggle_season(season).await {
            bail!("Season {} can only be expanded on a loaded TV page", season);
        }
    }

    Ok(())
}
