//! Movie and TV detail pages.

use super::card::Tile;
use super::skeleton;
use crate::core::detail::{DetailController, DetailView};
use crate::models::media::{
    Episode, MediaKind, Provider, SeasonSummary, TitleDetail, WatchProviders,
};
use crate::services::images::{ImageSize, ImageUrls, Placeholder};
use colored::Colorize;

pub const UNAVAILABLE_MESSAGE: &str =
    "Not available on streaming platforms yet, likely in theaters only.";
const NO_OVERVIEW: &str = "No overview available.";

/// A provider with its logo URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderBadge {
    pub name: String,
    pub logo_url: Option<String>,
}

/// The "where to watch" block of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderBlock {
    /// Movie page with a streaming offer.
    NowStreaming(Vec<ProviderBadge>),
    /// Movie page without one.
    Unavailable,
    /// TV page: every present category, in flatrate/rent/buy order.
    Offers(Vec<(&'static str, Vec<ProviderBadge>)>),
    /// TV page without any offer.
    Hidden,
}

fn badges(list: &[Provider], images: &ImageUrls) -> Vec<ProviderBadge> {
    list.iter()
        .map(|p| ProviderBadge {
            name: p.name.clone(),
            logo_url: images.url(ImageSize::Original, p.logo_path.as_deref()),
        })
        .collect()
}

pub fn provider_block(
    kind: MediaKind,
    providers: Option<&WatchProviders>,
    images: &ImageUrls,
) -> ProviderBlock {
    match kind {
        MediaKind::Movie => match providers.and_then(|p| p.flatrate.as_deref()) {
            Some(list) => ProviderBlock::NowStreaming(badges(list, images)),
            None => ProviderBlock::Unavailable,
        },
        MediaKind::Tv => {
            let offers: Vec<_> = providers
                .map(|p| p.categories())
                .unwrap_or_default()
                .into_iter()
                .map(|(label, list)| (label, badges(list, images)))
                .collect();
            if offers.is_empty() {
                ProviderBlock::Hidden
            } else {
                ProviderBlock::Offers(offers)
            }
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Date, length and genre line under the title.
pub fn header_facts(detail: &TitleDetail) -> String {
    let date = detail.date.as_deref().unwrap_or("N/A");
    let genres = detail
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let genres = if genres.is_empty() {
        "N/A".to_string()
    } else {
        genres
    };
    match detail.kind {
        MediaKind::Movie => {
            let runtime = detail
                .runtime
                .map(|r| format!("{} min", r))
                .unwrap_or_else(|| "N/A".to_string());
            format!("{} | {} | {}", date, runtime, genres)
        }
        MediaKind::Tv => format!(
            "{} | {}, {} | {}",
            date,
            plural(detail.seasons.len(), "season", "seasons"),
            plural(
                detail.number_of_episodes.unwrap_or(0) as usize,
                "episode",
                "episodes"
            ),
            genres
        ),
    }
}

/// Rating to one decimal, out of ten.
pub fn rating(detail: &TitleDetail) -> String {
    match detail.vote_average {
        Some(v) => format!("{:.1} / 10", v),
        None => "N/A".to_string(),
    }
}

fn section(title: &str) -> String {
    format!("\n{}", title.bold().underline())
}

fn render_providers(block: &ProviderBlock) -> Vec<String> {
    let names = |list: &[ProviderBadge]| {
        list.iter()
            .map(|b| match &b.logo_url {
                Some(logo) => format!("{} ({})", b.name, logo.dimmed()),
                None => b.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    match block {
        ProviderBlock::NowStreaming(list) => {
            vec![format!("{} {}", "Now Streaming:".bold(), names(list))]
        }
        ProviderBlock::Unavailable => vec![UNAVAILABLE_MESSAGE.dimmed().to_string()],
        ProviderBlock::Offers(offers) => offers
            .iter()
            .map(|(label, list)| format!("{} {}", format!("{}:", label).bold(), names(list)))
            .collect(),
        ProviderBlock::Hidden => Vec::new(),
    }
}

fn render_episode(ep: &Episode, images: &ImageUrls) -> Vec<String> {
    let runtime = ep
        .runtime
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let rating = ep
        .vote_average
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "N/A".to_string());
    vec![
        format!("      {}. {}", ep.episode_number, ep.name.bold()),
        format!("         {} mins | ⭐ {}", runtime, rating),
        format!("         {}", ep.overview.as_deref().unwrap_or(NO_OVERVIEW)),
        format!(
            "         {}",
            images
                .or_placeholder(ImageSize::W300, ep.still_path.as_deref(), Placeholder::Still)
                .dimmed()
        ),
    ]
}

fn render_season(
    season: &SeasonSummary,
    page: &DetailController,
    images: &ImageUrls,
) -> Vec<String> {
    let expanded = page.expanded_season() == Some(season.season_number);
    let marker = if expanded { "▼" } else { "▶" };
    let mut lines = vec![
        format!(
            "  {} {} (season {})",
            marker,
            season.name.bold(),
            season.season_number
        ),
        format!(
            "    Air Date: {} | Episodes: {}",
            season.air_date.as_deref().unwrap_or("N/A"),
            season.episode_count
        ),
        format!("    {}", season.overview.as_deref().unwrap_or(NO_OVERVIEW)),
        format!(
            "    {}",
            images
                .or_placeholder(
                    ImageSize::Original,
                    season.poster_path.as_deref(),
                    Placeholder::Profile
                )
                .dimmed()
        ),
    ];
    if expanded {
        for ep in page.episodes(season.season_number).unwrap_or(&[]) {
            lines.extend(render_episode(ep, images));
        }
    }
    lines
}

fn render_view(view: &DetailView, page: &DetailController, images: &ImageUrls) -> String {
    let detail = &view.detail;
    let mut lines = vec![
        detail.name.bold().to_string(),
        header_facts(detail).dimmed().to_string(),
        format!(
            "{} {}",
            "Poster:".bold(),
            images.or_placeholder(
                ImageSize::Original,
                detail.poster_path.as_deref(),
                Placeholder::Poster
            )
        ),
    ];
    if let Some(backdrop) = images.url(ImageSize::Original, detail.backdrop_path.as_deref()) {
        lines.push(format!("{} {}", "Backdrop:".bold(), backdrop));
    }

    match detail.kind {
        MediaKind::Movie => {
            lines.push(format!("{} {}", "Director:".bold(), view.directors));
        }
        MediaKind::Tv => {
            if let Some(creators) = &view.created_by {
                lines.push(format!("{} {}", "Created by:".bold(), creators));
            }
        }
    }
    lines.push(format!("{} {}", "Writers:".bold(), view.writers));
    if let Some(overview) = &detail.overview {
        lines.push(String::new());
        lines.push(overview.clone());
    }
    lines.push(format!("{} ⭐ {}", "Rating:".bold(), rating(detail)));
    if let Some(url) = view.trailer_url() {
        lines.push(format!("{} {}", "▶ Play Trailer:".red().bold(), url));
    }
    lines.extend(render_providers(&provider_block(
        detail.kind,
        view.providers.as_ref(),
        images,
    )));

    if !view.screenshots.is_empty() {
        let size = match detail.kind {
            MediaKind::Movie => ImageSize::Original,
            MediaKind::Tv => ImageSize::W400,
        };
        lines.push(section("Screenshots"));
        lines.extend(
            view.screenshots
                .iter()
                .filter_map(|path| images.url(size, Some(path)))
                .map(|url| format!("  {}", url)),
        );
    }

    if detail.kind == MediaKind::Tv && !detail.seasons.is_empty() {
        lines.push(section("Seasons & Episodes"));
        for season in &detail.seasons {
            lines.extend(render_season(season, page, images));
        }
    }

    if !view.cast.is_empty() {
        lines.push(section("Top Cast"));
        lines.extend(view.cast.iter().map(|actor| {
            format!(
                "  {} as {} {}",
                actor.name.bold(),
                actor.character.as_deref().unwrap_or("-"),
                images
                    .or_placeholder(
                        ImageSize::W200,
                        actor.profile_path.as_deref(),
                        Placeholder::Profile
                    )
                    .dimmed()
            )
        }));
    }

    if !view.reviews.is_empty() {
        lines.push(section("Reviews"));
        for review in &view.reviews {
            lines.push(format!(
                "  ({}) {} {}",
                review.initial().unwrap_or_default(),
                review.author.bold(),
                review.created_date().unwrap_or_default().dimmed()
            ));
            let excerpt: String = review.content.chars().take(300).collect();
            lines.push(format!("    {}", excerpt));
        }
    }

    if !view.similar.is_empty() {
        let title = match detail.kind {
            MediaKind::Movie => "Similar Movies",
            MediaKind::Tv => "Similar Shows",
        };
        lines.push(section(title));
        lines.extend(view.similar.iter().map(|item| {
            let tile = Tile::from_summary(item, images);
            format!(
                "  {} ({}) {} {}",
                tile.name,
                item.year().unwrap_or("?"),
                tile.route.unwrap_or_default().cyan(),
                tile.poster_url.dimmed()
            )
        }));
    }

    lines.join("\n")
}

/// Render a detail page, or its placeholder while details are pending.
pub fn render(page: &DetailController, images: &ImageUrls) -> String {
    match page.view() {
        Some(view) => render_view(view, page, images),
        None => skeleton::detail_page(),
    }
}
