//! Catalog records as the pages see them.
//!
//! Everything here is a transient view model: built from an API response,
//! owned by the controller that fetched it and dropped on navigation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Media kind of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the API and by detail routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind tag carried by list entries. Multi-search also returns people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Title(MediaKind),
    Person,
}

/// One entry of a title listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSummary {
    pub id: u64,
    /// `title` for movies, `name` for TV and people.
    pub name: String,
    /// `release_date` or `first_air_date`.
    pub date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub kind: EntryKind,
}

impl TitleSummary {
    /// Detail route for this entry, if it has a detail page.
    pub fn route(&self) -> Option<String> {
        match self.kind {
            EntryKind::Title(kind) => Some(format!("/{}/{}", kind, self.id)),
            EntryKind::Person => None,
        }
    }

    /// Year part of the date.
    pub fn year(&self) -> Option<&str> {
        self.date
            .as_deref()
            .and_then(|d| d.split('-').next())
            .filter(|y| !y.is_empty())
    }
}

/// One page of a paged listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: u32,
    /// Always at least 1.
    pub total_pages: u32,
}

/// Genre id/name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Season summary from the TV details payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub name: String,
    pub air_date: Option<String>,
    pub episode_count: u32,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

/// Full record of one title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleDetail {
    pub id: u64,
    pub kind: MediaKind,
    pub name: String,
    pub overview: Option<String>,
    pub date: Option<String>,
    /// Minutes. For TV this is the first listed episode run time.
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    pub vote_average: Option<f32>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub number_of_episodes: Option<u32>,
    pub created_by: Vec<String>,
    pub seasons: Vec<SeasonSummary>,
}

/// Cast entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Crew entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

/// Cast and crew of one title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditsInfo {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl CreditsInfo {
    /// Names of crew members whose job is one of `jobs`, in API order.
    pub fn crew_names<'a>(&'a self, jobs: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.crew
            .iter()
            .filter(move |member| jobs.contains(&member.job.as_str()))
            .map(|member| member.name.as_str())
    }
}

/// A video attached to a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    pub video_type: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.video_type == "Trailer"
    }

    /// Watch URL, only known for YouTube-hosted videos.
    pub fn watch_url(&self) -> Option<String> {
        (self.site == "YouTube").then(|| format!("https://www.youtube.com/watch?v={}", self.key))
    }
}

/// A user review.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: Option<String>,
}

impl Review {
    /// Upper-cased first letter of the author name.
    pub fn initial(&self) -> Option<String> {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }

    /// Calendar date of `created_at`.
    pub fn created_date(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .or_else(|| raw.get(..10).map(str::to_string))
    }
}

/// One episode of a season.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: u64,
    pub episode_number: u32,
    pub name: String,
    pub overview: Option<String>,
    pub still_path: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f32>,
}

/// Episodes fetched so far, keyed by season number.
pub type SeasonEpisodes = BTreeMap<u32, Vec<Episode>>;

/// A streaming/rental/purchase service.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
}

/// Offer categories for one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchProviders {
    pub region: String,
    pub flatrate: Option<Vec<Provider>>,
    pub rent: Option<Vec<Provider>>,
    pub buy: Option<Vec<Provider>>,
}

impl WatchProviders {
    /// Present categories in display order, with their headings.
    pub fn categories(&self) -> Vec<(&'static str, &[Provider])> {
        [
            ("Now Streaming", &self.flatrate),
            ("Rent", &self.rent),
            ("Buy", &self.buy),
        ]
        .into_iter()
        .filter_map(|(label, list)| list.as_deref().map(|l| (label, l)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(author: &str, created_at: Option<&str>) -> Review {
        Review {
            id: "r1".to_string(),
            author: author.to_string(),
            content: String::new(),
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn test_review_initial_and_date() {
        let r = review("garethmb", Some("2023-05-04T10:11:12.345Z"));
        assert_eq!(r.initial().as_deref(), Some("G"));
        assert_eq!(r.created_date().as_deref(), Some("2023-05-04"));

        assert_eq!(review("", None).initial(), None);
        assert_eq!(review("x", None).created_date(), None);
    }

    #[test]
    fn test_person_entries_have_no_route() {
        let entry = TitleSummary {
            id: 7,
            name: "Someone".to_string(),
            date: None,
            poster_path: None,
            backdrop_path: None,
            overview: None,
            kind: EntryKind::Person,
        };
        assert_eq!(entry.route(), None);

        let movie = TitleSummary {
            kind: EntryKind::Title(MediaKind::Movie),
            date: Some("1999-03-31".to_string()),
            ..entry
        };
        assert_eq!(movie.route().as_deref(), Some("/movie/7"));
        assert_eq!(movie.year(), Some("1999"));
    }

    #[test]
    fn test_watch_provider_categories_order() {
        let p = |name: &str| Provider {
            id: 1,
            name: name.to_string(),
            logo_path: None,
        };
        let providers = WatchProviders {
            region: "US".to_string(),
            flatrate: None,
            rent: Some(vec![p("Apple TV")]),
            buy: Some(vec![p("Google Play")]),
        };
        let labels: Vec<_> = providers.categories().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Rent", "Buy"]);
    }
}
