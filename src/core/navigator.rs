//! Active page and route switching.
//!
//! Navigating discards the current page's controller and everything it
//! fetched; the new page mounts fresh and loads.

use super::browse::BrowseController;
use super::detail::DetailController;
use super::page_state::{BrowseMode, BrowsePage};
use super::route::Route;
use super::search::SearchController;
use crate::models::media::TitleSummary;
use crate::services::images::ImageUrls;
use crate::services::tmdb::{TmdbClient, Transport};
use crate::ui;
use crate::ui::page::{BrowseView, SearchView};
use crate::ui::pagination::Pagination;

/// Controller of the page currently on screen.
#[derive(Debug)]
pub enum ActivePage {
    Browse(BrowseController),
    Search(SearchController),
    Detail(DetailController),
}

impl ActivePage {
    fn mount(route: &Route) -> Self {
        match route {
            Route::Home => ActivePage::Browse(BrowseController::new(BrowsePage::Home)),
            Route::Movies => ActivePage::Browse(BrowseController::new(BrowsePage::Movies)),
            Route::Tv => ActivePage::Browse(BrowseController::new(BrowsePage::Tv)),
            Route::Search(q) => ActivePage::Search(SearchController::new(q)),
            Route::Detail(kind, id) => ActivePage::Detail(DetailController::new(*kind, *id)),
        }
    }
}

/// Owns the client and the page on screen.
pub struct Navigator<T: Transport> {
    client: TmdbClient<T>,
    images: ImageUrls,
    route: Route,
    page: ActivePage,
}

impl<T: Transport> Navigator<T> {
    /// Mount `route` and run its initial load.
    pub async fn open(client: TmdbClient<T>, images: ImageUrls, route: Route) -> Self {
        let page = ActivePage::mount(&route);
        let mut nav = Self {
            client,
            images,
            route,
            page,
        };
        nav.load().await;
        nav
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &ActivePage {
        &self.page
    }

    pub fn client(&self) -> &TmdbClient<T> {
        &self.client
    }

    async fn load(&mut self) {
        tracing::debug!("Loading {}", self.route);
        match &mut self.page {
            ActivePage::Browse(browse) => browse.refresh(&self.client).await,
            ActivePage::Search(search) => search.refresh(&self.client).await,
            ActivePage::Detail(detail) => detail.load(&self.client).await,
        }
    }

    /// Leave the current page for `route`.
    pub async fn navigate(&mut self, route: Route) {
        self.page = ActivePage::mount(&route);
        self.route = route;
        self.load().await;
    }

    fn pagination(&self) -> Option<Pagination> {
        match &self.page {
            ActivePage::Browse(browse) => BrowseView::build(browse, &self.images).pagination,
            _ => None,
        }
    }

    /// Click Next. Ignored when the button is disabled or absent.
    pub async fn next_page(&mut self) -> bool {
        let target = self.pagination().and_then(|p| p.next());
        self.go_to_page(target).await
    }

    /// Click Prev. Ignored when the button is disabled or absent.
    pub async fn prev_page(&mut self) -> bool {
        let target = self.pagination().and_then(|p| p.prev());
        self.go_to_page(target).await
    }

    /// Jump straight to `page` on a browse page. Must be within the known range.
    pub async fn jump_to_page(&mut self, page: u32) -> bool {
        let target = self
            .pagination()
            .filter(|p| (1..=p.total_pages).contains(&page))
            .map(|_| page);
        self.go_to_page(target).await
    }

    async fn go_to_page(&mut self, target: Option<u32>) -> bool {
        match (target, &mut self.page) {
            (Some(page), ActivePage::Browse(browse)) => {
                browse.go_to_page(&self.client, page).await;
                true
            }
            _ => false,
        }
    }

    /// Press a mode button on a browse page.
    pub async fn select_mode(&mut self, mode: BrowseMode) -> bool {
        match &mut self.page {
            ActivePage::Browse(browse) => {
                browse.select_mode(&self.client, mode).await;
                browse.state().mode() == mode
            }
            _ => false,
        }
    }

    /// Pick a genre chip by id, name or "all". Only in genre mode.
    pub async fn select_genre(&mut self, input: &str) -> bool {
        let ActivePage::Browse(browse) = &mut self.page else {
            return false;
        };
        if browse.state().mode() != BrowseMode::Genre {
            return false;
        }
        match ui::genre_filter::select(browse.genres(), input) {
            Some(genre) => {
                browse.select_genre(&self.client, genre).await;
                true
            }
            None => false,
        }
    }

    /// Expand or collapse a season the loaded TV page lists.
    pub async fn toggle_season(&mut self, season: u32) -> bool {
        match &mut self.page {
            ActivePage::Detail(detail) if detail.has_season(season) => {
                detail.toggle_season(&self.client, season).await;
                true
            }
            _ => false,
        }
    }

    /// Titles the user can open by number on the current page.
    pub fn listed(&self) -> &[TitleSummary] {
        match &self.page {
            ActivePage::Browse(browse) if !browse.is_loading() => browse.items(),
            ActivePage::Search(search) if !search.is_loading() => search.items(),
            ActivePage::Detail(detail) => detail
                .view()
                .map(|v| v.similar.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Follow the n-th listed title (1-based).
    pub async fn open_listed(&mut self, n: usize) -> bool {
        let route = n
            .checked_sub(1)
            .and_then(|i| self.listed().get(i))
            .and_then(TitleSummary::route)
            .and_then(|r| r.parse::<Route>().ok());
        match route {
            Some(route) => {
                self.navigate(route).await;
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        match &self.page {
            ActivePage::Browse(browse) => BrowseView::build(browse, &self.images).render(),
            ActivePage::Search(search) => SearchView::build(search, &self.images).render(),
            ActivePage::Detail(detail) => ui::detail::render(detail, &self.images),
        }
    }
}
