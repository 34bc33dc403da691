//! Browse page controller (Home, Movies, TV).
//!
//! Every state transition issues exactly one list request. Requests are
//! stamped with a generation number; only the response to the most
//! recently issued request is ever applied, so a slow page-2 response that
//! arrives after page 3 was requested is dropped instead of overwriting it.

use super::page_state::{BrowseMode, BrowsePage, PageState};
use crate::error::FetchResult;
use crate::models::media::{Genre, MediaKind, Page, TitleSummary};
use crate::services::tmdb::{TmdbClient, Transport};
use std::collections::HashMap;

/// Parameters of one issued list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub generation: u64,
    pub mode: BrowseMode,
    pub genre: Option<u64>,
    pub page: u32,
}

/// Outcome of a list request, tagged with the generation it was issued at.
#[derive(Debug)]
pub struct ListResponse {
    pub generation: u64,
    pub result: FetchResult<Page<TitleSummary>>,
}

/// State owner for one browse page.
#[derive(Debug)]
pub struct BrowseController {
    page: BrowsePage,
    state: PageState,
    items: Vec<TitleSummary>,
    loading: bool,
    generation: u64,
    genres: HashMap<MediaKind, Vec<Genre>>,
}

impl BrowseController {
    /// A freshly mounted page: loading until the first list arrives.
    pub fn new(page: BrowsePage) -> Self {
        Self {
            page,
            state: PageState::new(page.initial_mode()),
            items: Vec::new(),
            loading: true,
            generation: 0,
            genres: HashMap::new(),
        }
    }

    pub fn page(&self) -> BrowsePage {
        self.page
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Titles currently displayed.
    pub fn items(&self) -> &[TitleSummary] {
        &self.items
    }

    /// Whether the latest issued request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cached genre list for this page's kind (empty until fetched).
    pub fn genres(&self) -> &[Genre] {
        self.page
            .kind()
            .and_then(|kind| self.genres.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether switching to genre mode still has to fetch the genre list.
    pub fn needs_genres(&self) -> bool {
        self.state.mode() == BrowseMode::Genre
            && self
                .page
                .kind()
                .is_some_and(|kind| !self.genres.contains_key(&kind))
    }

    /// Switch listing mode. `None` when nothing changed or the page does
    /// not offer the mode.
    pub fn set_mode(&mut self, mode: BrowseMode) -> Option<ListRequest> {
        if !self.page.modes().contains(&mode) {
            tracing::warn!("{} page has no {} mode", self.page.title(), mode.label());
            return None;
        }
        self.state.set_mode(mode).then(|| self.begin_fetch())
    }

    /// Select a genre (`None` for all genres).
    pub fn set_genre(&mut self, genre: Option<u64>) -> Option<ListRequest> {
        self.state.set_genre(genre).then(|| self.begin_fetch())
    }

    /// Move to a page. Bounds are the pagination control's concern.
    pub fn set_page(&mut self, page: u32) -> Option<ListRequest> {
        self.state.set_page(page).then(|| self.begin_fetch())
    }

    /// Issue a request for the current state.
    pub fn begin_fetch(&mut self) -> ListRequest {
        self.generation += 1;
        self.loading = true;
        ListRequest {
            generation: self.generation,
            mode: self.state.mode(),
            genre: self.state.genre(),
            page: self.state.page(),
        }
    }

    /// Run one list request. Does not touch controller state, so several
    /// requests may be in flight at once.
    pub async fn fetch<T: Transport>(
        client: &TmdbClient<T>,
        page: BrowsePage,
        request: &ListRequest,
    ) -> ListResponse {
        // Pages without a kind only offer trending
        let kind = page.kind().unwrap_or(MediaKind::Movie);
        let result = match request.mode {
            BrowseMode::Trending => {
                client
                    .trending(page.kind(), page.trending_window(), request.page)
                    .await
            }
            BrowseMode::Latest => client.latest(kind, request.page).await,
            BrowseMode::TopRated => client.top_rated(kind, request.page).await,
            BrowseMode::Genre => client.discover(kind, request.genre, request.page).await,
        };
        ListResponse {
            generation: request.generation,
            result,
        }
    }

    /// Apply a response. Returns `false` if it was stale and dropped.
    pub fn apply(&mut self, response: ListResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!(
                "Dropping stale list response (generation {}, current {})",
                response.generation,
                self.generation
            );
            return false;
        }

        match response.result {
            Ok(page) => {
                tracing::debug!(
                    "Loaded {} titles, page {} of {}",
                    page.results.len(),
                    self.state.page(),
                    page.total_pages
                );
                self.items = page.results;
                self.state.set_total_pages(page.total_pages);
            }
            Err(e) => {
                tracing::error!("Failed to load {} list: {}", self.page.title(), e);
            }
        }
        self.loading = false;
        true
    }

    /// Issue and apply a request for the current state.
    pub async fn refresh<T: Transport>(&mut self, client: &TmdbClient<T>) {
        let request = self.begin_fetch();
        self.run(client, request).await;
    }

    async fn run<T: Transport>(&mut self, client: &TmdbClient<T>, request: ListRequest) {
        let response = Self::fetch(client, self.page, &request).await;
        self.apply(response);
    }

    /// Fetch the genre list once per kind. Failures leave it empty so the
    /// next switch to genre mode tries again.
    pub async fn ensure_genres<T: Transport>(&mut self, client: &TmdbClient<T>) {
        let Some(kind) = self.page.kind() else {
            return;
        };
        if self.genres.contains_key(&kind) {
            return;
        }
        match client.genres(kind).await {
            Ok(genres) => {
                tracing::debug!("Loaded {} {} genres", genres.len(), kind);
                self.genres.insert(kind, genres);
            }
            Err(e) => tracing::error!("Failed to load {} genres: {}", kind, e),
        }
    }

    /// Switch mode and load the new listing (and the genre list if needed).
    pub async fn select_mode<T: Transport>(&mut self, client: &TmdbClient<T>, mode: BrowseMode) {
        if let Some(request) = self.set_mode(mode) {
            if self.needs_genres() {
                self.ensure_genres(client).await;
            }
            self.run(client, request).await;
        }
    }

    /// Select a genre and load its first page.
    pub async fn select_genre<T: Transport>(&mut self, client: &TmdbClient<T>, genre: Option<u64>) {
        if let Some(request) = self.set_genre(genre) {
            self.run(client, request).await;
        }
    }

    /// Move to a page and load it.
    pub async fn go_to_page<T: Transport>(&mut self, client: &TmdbClient<T>, page: u32) {
        if let Some(request) = self.set_page(page) {
            self.run(client, request).await;
        }
    }
}
