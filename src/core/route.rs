//! Navigation routes.

use crate::models::media::MediaKind;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// One navigable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Movies,
    Tv,
    Detail(MediaKind, u64),
    Search(String),
}

impl Route {
    /// Route for a search box submission. Blank input goes nowhere.
    pub fn search(text: &str) -> Option<Route> {
        let text = text.trim();
        (!text.is_empty()).then(|| Route::Search(text.to_string()))
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRoute(s.to_string());
        let (path, query) = match s.trim().split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s.trim(), None),
        };
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["movies"] => Ok(Route::Movies),
            ["tv"] => Ok(Route::Tv),
            [kind @ ("movie" | "tv"), id] => {
                let id = id.parse().map_err(|_| invalid())?;
                let kind = if *kind == "movie" {
                    MediaKind::Movie
                } else {
                    MediaKind::Tv
                };
                Ok(Route::Detail(kind, id))
            }
            ["search"] => {
                let q = query
                    .into_iter()
                    .flat_map(|q| q.split('&'))
                    .find_map(|pair| pair.strip_prefix("q="))
                    .unwrap_or("");
                let q = urlencoding::decode(&q.replace('+', " "))
                    .map_err(|_| invalid())?
                    .into_owned();
                Ok(Route::Search(q))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Movies => write!(f, "/movies"),
            Route::Tv => write!(f, "/tv"),
            Route::Detail(kind, id) => write!(f, "/{}/{}", kind, id),
            Route::Search(q) => write!(f, "/search?q={}", urlencoding::encode(q)),
        }
    }
}
