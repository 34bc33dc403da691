//! Search page controller.

use crate::error::FetchResult;
use crate::models::media::{Page, TitleSummary};
use crate::services::tmdb::{TmdbClient, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchResponse {
    pub generation: u64,
    pub result: FetchResult<Page<TitleSummary>>,
}

/// Multi-kind search for one query term, first page only.
#[derive(Debug)]
pub struct SearchController {
    query: String,
    items: Vec<TitleSummary>,
    loading: bool,
    generation: u64,
}

impl SearchController {
    /// An empty query never issues a request and shows an empty grid.
    pub fn new(query: &str) -> Self {
        let query = query.trim().to_string();
        Self {
            loading: !query.is_empty(),
            query,
            items: Vec::new(),
            generation: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[TitleSummary] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn heading(&self) -> String {
        format!("Search Results for \"{}\"", self.query)
    }

    /// Replace the query. `None` when it is unchanged or empty.
    pub fn set_query(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query == self.query {
            return None;
        }
        self.query = query.to_string();
        self.items.clear();
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() {
            self.loading = false;
            return None;
        }
        self.generation += 1;
        self.loading = true;
        Some(SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    pub async fn fetch<T: Transport>(
        client: &TmdbClient<T>,
        request: &SearchRequest,
    ) -> SearchResponse {
        SearchResponse {
            generation: request.generation,
            result: client.search_multi(&request.query, 1).await,
        }
    }

    /// Returns `false` if the response was stale and dropped.
    pub fn apply(&mut self, response: SearchResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!("Dropping stale search response");
            return false;
        }
        match response.result {
            Ok(page) => self.items = page.results,
            Err(e) => tracing::error!("Search error: {}", e),
        }
        self.loading = false;
        true
    }

    /// Issue and apply the search for the current query.
    pub async fn refresh<T: Transport>(&mut self, client: &TmdbClient<T>) {
        if let Some(request) = self.begin_fetch() {
            let response = Self::fetch(client, &request).await;
            self.apply(response);
        }
    }
}
