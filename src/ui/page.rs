//! Browse and search pages assembled from their controllers.

use super::card::{self, Grid, HeroSlide};
use super::genre_filter::{self, Chip};
use super::pagination::Pagination;
use crate::core::browse::BrowseController;
use crate::core::page_state::{BrowseMode, BrowsePage};
use crate::core::search::SearchController;
use crate::services::images::ImageUrls;
use colored::Colorize;

/// Everything a browse page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub title: &'static str,
    /// Mode buttons with the active one flagged.
    pub modes: Vec<(BrowseMode, bool)>,
    /// Genre chips, only in genre mode.
    pub genre_chips: Option<Vec<Chip>>,
    /// Home carousel; empty elsewhere and while loading.
    pub hero: Vec<HeroSlide>,
    pub grid: Grid,
    /// Home hides pagination while loading.
    pub pagination: Option<Pagination>,
}

impl BrowseView {
    pub fn build(browse: &BrowseController, images: &ImageUrls) -> Self {
        let page = browse.page();
        let state = browse.state();
        let loading = browse.is_loading();
        let is_home = page == BrowsePage::Home;

        let modes = if is_home {
            Vec::new()
        } else {
            page.modes()
                .iter()
                .map(|m| (*m, *m == state.mode()))
                .collect()
        };

        let genre_chips = (state.mode() == BrowseMode::Genre)
            .then(|| genre_filter::chips(browse.genres(), state.genre()));

        let hero = if is_home && !loading {
            card::hero_slides(browse.items(), images)
        } else {
            Vec::new()
        };

        let pagination = (!is_home || !loading)
            .then(|| Pagination::new(state.page(), state.total_pages()));

        Self {
            title: page.title(),
            modes,
            genre_chips,
            hero,
            grid: Grid::build(browse.items(), loading, images),
            pagination,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.title.bold().cyan().to_string()];

        if !self.modes.is_empty() {
            lines.push(
                self.modes
                    .iter()
                    .map(|(mode, active)| {
                        if *active {
                            format!("[{}]", mode.label()).blue().bold().to_string()
                        } else {
                            format!(" {} ", mode.label())
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        if let Some(chips) = &self.genre_chips {
            lines.push(genre_filter::render(chips));
        }
        if !self.hero.is_empty() {
            lines.push(String::new());
            lines.push(card::render_hero(&self.hero));
        }

        lines.push(String::new());
        lines.push(self.grid.render());

        if let Some(pagination) = &self.pagination {
            lines.push(String::new());
            lines.push(pagination.render());
        }
        lines.join("\n")
    }
}

/// Everything the search page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub heading: String,
    pub grid: Grid,
}

impl SearchView {
    pub fn build(search: &SearchController, images: &ImageUrls) -> Self {
        Self {
            heading: search.heading(),
            grid: Grid::build(search.items(), search.is_loading(), images),
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.heading.bold().cyan(), self.grid.render())
    }
}
