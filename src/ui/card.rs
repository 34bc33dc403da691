//! Summary tiles, the title grid and the home hero slides.

use super::skeleton;
use crate::models::media::TitleSummary;
use crate::services::images::{ImageSize, ImageUrls, Placeholder};
use colored::Colorize;

/// Slides shown in the home hero carousel.
const HERO_SLIDES: usize = 5;

/// One clickable summary tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub name: String,
    pub date: Option<String>,
    pub poster_url: String,
    /// Detail route; `None` for entries without a detail page.
    pub route: Option<String>,
}

impl Tile {
    pub fn from_summary(item: &TitleSummary, images: &ImageUrls) -> Self {
        Self {
            name: item.name.clone(),
            date: item.date.clone(),
            poster_url: images.or_placeholder(
                ImageSize::W500,
                item.poster_path.as_deref(),
                Placeholder::Poster,
            ),
            route: item.route(),
        }
    }
}

/// A grid of tiles, or of placeholders while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub tiles: Vec<Tile>,
    pub placeholders: usize,
}

impl Grid {
    pub fn loading() -> Self {
        Self {
            tiles: Vec::new(),
            placeholders: skeleton::GRID_PLACEHOLDERS,
        }
    }

    pub fn from_items(items: &[TitleSummary], images: &ImageUrls) -> Self {
        Self {
            tiles: items
                .iter()
                .map(|item| Tile::from_summary(item, images))
                .collect(),
            placeholders: 0,
        }
    }

    /// Grid for a page that may still be loading.
    pub fn build(items: &[TitleSummary], loading: bool, images: &ImageUrls) -> Self {
        if loading {
            Self::loading()
        } else {
            Self::from_items(items, images)
        }
    }

    pub fn render(&self) -> String {
        if self.placeholders > 0 {
            return (0..self.placeholders)
                .map(|_| skeleton::tile())
                .collect::<Vec<_>>()
                .join("\n");
        }
        if self.tiles.is_empty() {
            return "No results.".yellow().to_string();
        }

        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                let title = if tile.name.chars().count() > 38 {
                    format!("{}...", tile.name.chars().take(35).collect::<String>())
                } else {
                    tile.name.clone()
                };
                format!(
                    " {:>3} | {} | {:<10} | {}",
                    i + 1,
                    format!("{:<40}", title).bold(),
                    tile.date.as_deref().unwrap_or(""),
                    tile.route.as_deref().unwrap_or("-").cyan()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One home carousel slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroSlide {
    pub name: String,
    pub overview: Option<String>,
    pub backdrop_url: Option<String>,
    pub route: Option<String>,
}

/// Slides for the first few titles of a listing.
pub fn hero_slides(items: &[TitleSummary], images: &ImageUrls) -> Vec<HeroSlide> {
    items
        .iter()
        .take(HERO_SLIDES)
        .map(|item| HeroSlide {
            name: item.name.clone(),
            overview: item.overview.clone(),
            backdrop_url: images.url(ImageSize::Original, item.backdrop_path.as_deref()),
            route: item.route(),
        })
        .collect()
}

pub fn render_hero(slides: &[HeroSlide]) -> String {
    slides
        .iter()
        .map(|slide| {
            let mut block = format!("{} {}", "★".yellow(), slide.name.bold());
            if let Some(overview) = &slide.overview {
                block.push_str(&format!("\n    {}", overview));
            }
            if let Some(route) = &slide.route {
                block.push_str(&format!("\n    {} {}", "Watch Now ->".red(), route));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
