//! Browse page state: which listing, which page, which genre.

use crate::models::media::MediaKind;
use crate::services::tmdb::TrendingWindow;
use std::str::FromStr;

/// Listing shown by a browse page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowseMode {
    Trending,
    Latest,
    TopRated,
    Genre,
}

impl BrowseMode {
    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            BrowseMode::Trending => "Trending",
            BrowseMode::Latest => "Latest",
            BrowseMode::TopRated => "Top Rated",
            BrowseMode::Genre => "Genre",
        }
    }
}

impl FromStr for BrowseMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(|c: char| c == '_' || c == ' ', "-").as_str() {
            "trending" => Ok(BrowseMode::Trending),
            "latest" => Ok(BrowseMode::Latest),
            "top-rated" | "toprated" => Ok(BrowseMode::TopRated),
            "genre" => Ok(BrowseMode::Genre),
            other => Err(crate::Error::other(format!("Unknown mode: {}", other))),
        }
    }
}

/// The three browse pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsePage {
    Home,
    Movies,
    Tv,
}

impl BrowsePage {
    /// Kind listed by the page. Home mixes movies and TV.
    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            BrowsePage::Home => None,
            BrowsePage::Movies => Some(MediaKind::Movie),
            BrowsePage::Tv => Some(MediaKind::Tv),
        }
    }

    /// Modes offered, in button order.
    pub fn modes(&self) -> &'static [BrowseMode] {
        match self {
            BrowsePage::Home => &[BrowseMode::Trending],
            BrowsePage::Movies => &[
                BrowseMode::Trending,
                BrowseMode::Latest,
                BrowseMode::TopRated,
                BrowseMode::Genre,
            ],
            BrowsePage::Tv => &[
                BrowseMode::TopRated,
                BrowseMode::Latest,
                BrowseMode::Trending,
                BrowseMode::Genre,
            ],
        }
    }

    pub fn initial_mode(&self) -> BrowseMode {
        self.modes()[0]
    }

    pub fn trending_window(&self) -> TrendingWindow {
        match self {
            BrowsePage::Home => TrendingWindow::Day,
            _ => TrendingWindow::Week,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BrowsePage::Home => "Trending Today",
            BrowsePage::Movies => "Movies",
            BrowsePage::Tv => "TV Series",
        }
    }
}

/// Mode, page and genre of a browse page.
///
/// Changing mode or genre always puts the page back to 1. The page itself
/// is stored as requested: staying inside `1..=total_pages` is the job of
/// the pagination control, which disables its buttons at the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    mode: BrowseMode,
    genre: Option<u64>,
    page: u32,
    total_pages: u32,
}

impl PageState {
    pub fn new(mode: BrowseMode) -> Self {
        Self {
            mode,
            genre: None,
            page: 1,
            total_pages: 1,
        }
    }

    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    /// Selected genre, `None` for "All".
    pub fn genre(&self) -> Option<u64> {
        self.genre
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns whether anything changed.
    pub fn set_mode(&mut self, mode: BrowseMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.page = 1;
        true
    }

    /// Returns whether anything changed.
    pub fn set_genre(&mut self, genre: Option<u64>) -> bool {
        if self.genre == genre {
            return false;
        }
        self.genre = genre;
        self.page = 1;
        true
    }

    /// Returns whether anything changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total.max(1);
    }
}
