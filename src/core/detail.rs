//! Detail page controller (movie and TV).
//!
//! A load issues one concurrent fan-out of every sub-fetch the page needs
//! and keeps each outcome as its own tagged result, so a failed reviews
//! call empties the reviews section and nothing else. The page stays on
//! its placeholder until the primary details fetch has succeeded.

use crate::error::FetchResult;
use crate::models::media::{
    CastMember, CreditsInfo, Episode, MediaKind, Review, SeasonEpisodes, TitleDetail,
    TitleSummary, Video, WatchProviders,
};
use crate::services::tmdb::{TmdbClient, Transport};

const WRITER_JOBS: &[&str] = &["Writer", "Screenplay", "Author"];
const DIRECTOR_JOBS: &[&str] = &["Director"];

const SCREENSHOT_LIMIT: usize = 5;
const REVIEW_LIMIT: usize = 3;
const SIMILAR_LIMIT: usize = 6;

fn cast_limit(kind: MediaKind) -> usize {
    match kind {
        MediaKind::Movie => 6,
        MediaKind::Tv => 10,
    }
}

fn writer_limit(kind: MediaKind) -> usize {
    match kind {
        MediaKind::Movie => 3,
        MediaKind::Tv => 5,
    }
}

/// Comma-joined names, or "N/A" when there are none.
fn join_or_na<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "N/A".to_string()
    } else {
        joined
    }
}

/// Outcome of every sub-fetch of one load.
#[derive(Debug)]
pub struct DetailBundle {
    pub details: FetchResult<TitleDetail>,
    pub credits: FetchResult<CreditsInfo>,
    pub videos: FetchResult<Vec<Video>>,
    pub images: FetchResult<Vec<String>>,
    pub reviews: FetchResult<Vec<Review>>,
    pub similar: FetchResult<Vec<TitleSummary>>,
    pub providers: FetchResult<Option<WatchProviders>>,
}

/// Everything the detail page displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub detail: TitleDetail,
    pub cast: Vec<CastMember>,
    /// Videos of type "Trailer", in API order.
    pub trailers: Vec<Video>,
    /// Backdrop paths.
    pub screenshots: Vec<String>,
    pub reviews: Vec<Review>,
    pub similar: Vec<TitleSummary>,
    pub directors: String,
    pub writers: String,
    /// TV creators, `None` when the show lists none.
    pub created_by: Option<String>,
    pub providers: Option<WatchProviders>,
}

/// Unwrap a sub-fetch, logging and falling back to the default on failure.
fn slice_or_default<T: Default>(what: &str, id: u64, result: FetchResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch {} for {}: {}", what, id, e);
        T::default()
    })
}

impl DetailView {
    /// Build the view from a bundle. `None` while the details are missing.
    pub fn assemble(kind: MediaKind, id: u64, bundle: DetailBundle) -> Option<Self> {
        let detail = match bundle.details {
            Ok(detail) => detail,
            Err(e) => {
                tracing::error!("Error fetching {} {} details: {}", kind, id, e);
                return None;
            }
        };

        let credits = slice_or_default("credits", id, bundle.credits);
        let directors = join_or_na(credits.crew_names(DIRECTOR_JOBS));
        let writers = join_or_na(credits.crew_names(WRITER_JOBS).take(writer_limit(kind)));
        let created_by = (!detail.created_by.is_empty()).then(|| detail.created_by.join(", "));

        let mut cast = credits.cast;
        cast.truncate(cast_limit(kind));

        let trailers = slice_or_default("videos", id, bundle.videos)
            .into_iter()
            .filter(Video::is_trailer)
            .collect();

        let mut screenshots = slice_or_default("images", id, bundle.images);
        screenshots.truncate(SCREENSHOT_LIMIT);
        let mut reviews = slice_or_default("reviews", id, bundle.reviews);
        reviews.truncate(REVIEW_LIMIT);
        let mut similar = slice_or_default("similar titles", id, bundle.similar);
        similar.truncate(SIMILAR_LIMIT);
        let providers = slice_or_default("watch providers", id, bundle.providers);

        Some(Self {
            detail,
            cast,
            trailers,
            screenshots,
            reviews,
            similar,
            directors,
            writers,
            created_by,
            providers,
        })
    }

    /// The first trailer.
    pub fn trailer(&self) -> Option<&Video> {
        self.trailers.first()
    }

    /// Play link of the first trailer that has one.
    pub fn trailer_url(&self) -> Option<String> {
        self.trailers.iter().find_map(Video::watch_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub kind: MediaKind,
    pub id: u64,
}

#[derive(Debug)]
pub struct DetailResponse {
    pub generation: u64,
    pub bundle: DetailBundle,
}

/// State owner for one detail page.
#[derive(Debug)]
pub struct DetailController {
    kind: MediaKind,
    id: u64,
    generation: u64,
    view: Option<DetailView>,
    episodes: SeasonEpisodes,
    expanded: Option<u32>,
}

impl DetailController {
    pub fn new(kind: MediaKind, id: u64) -> Self {
        Self {
            kind,
            id,
            generation: 0,
            view: None,
            episodes: SeasonEpisodes::new(),
            expanded: None,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// `None` while the page shows its placeholder.
    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_none()
    }

    /// The one expanded season, if any.
    pub fn expanded_season(&self) -> Option<u32> {
        self.expanded
    }

    /// Cached episodes of a season.
    /// Whether the loaded show lists season `season`.
    pub fn has_season(&self, season: u32) -> bool {
        self.view.as_ref().is_some_and(|view| {
            view.detail
                .seasons
                .iter()
                .any(|s| s.season_number == season)
        })
    }

    pub fn episodes(&self, season: u32) -> Option<&[Episode]> {
        self.episodes.get(&season).map(Vec::as_slice)
    }

    /// Point the page at another title. Everything fetched for the old
    /// one is dropped.
    pub fn set_id(&mut self, id: u64) -> DetailRequest {
        self.id = id;
        self.view = None;
        self.episodes.clear();
        self.expanded = None;
        self.begin_load()
    }

    pub fn begin_load(&mut self) -> DetailRequest {
        self.generation += 1;
        DetailRequest {
            generation: self.generation,
            kind: self.kind,
            id: self.id,
        }
    }

    /// Run the whole fan-out concurrently.
    pub async fn fetch<T: Transport>(
        client: &TmdbClient<T>,
        request: &DetailRequest,
    ) -> DetailResponse {
        let (kind, id) = (request.kind, request.id);
        let (details, credits, videos, images, reviews, similar, providers) = futures::join!(
            client.details(kind, id),
            client.credits(kind, id),
            client.videos(kind, id),
            client.images(kind, id),
            client.reviews(kind, id),
            client.similar(kind, id),
            client.watch_providers(kind, id),
        );
        DetailResponse {
            generation: request.generation,
            bundle: DetailBundle {
                details,
                credits,
                videos,
                images,
                reviews,
                similar,
                providers,
            },
        }
    }

    /// Returns `false` if the response was stale and dropped.
    pub fn apply(&mut self, response: DetailResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!("Dropping stale detail response for {} {}", self.kind, self.id);
            return false;
        }
        if let Some(view) = DetailView::assemble(self.kind, self.id, response.bundle) {
            self.view = Some(view);
        }
        true
    }

    /// Issue and apply a load for the current title.
    pub async fn load<T: Transport>(&mut self, client: &TmdbClient<T>) {
        let request = self.begin_load();
        let response = Self::fetch(client, &request).await;
        self.apply(response);
    }

    /// Expand a season, or collapse it if it is the expanded one.
    ///
    /// Episodes are fetched on first expansion only; collapsing keeps them.
    /// Expanding a season collapses whichever other season was open.
    pub async fn toggle_season<T: Transport>(&mut self, client: &TmdbClient<T>, season: u32) {
        if self.kind != MediaKind::Tv {
            return;
        }
        if !self.has_season(season) {
            tracing::warn!("{} {} has no season {}", self.kind, self.id, season);
            return;
        }
        if self.expanded == Some(season) {
            self.expanded = None;
            return;
        }
        if !self.episodes.contains_key(&season) {
            match client.season_episodes(self.id, season).await {
                Ok(episodes) => {
                    self.episodes.insert(season, episodes);
                }
                Err(e) => tracing::error!("Failed to fetch season {} details: {}", season, e),
            }
        }
        self.expanded = Some(season);
    }
}
