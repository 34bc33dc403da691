//! Integration tests for the search page.

mod common;

use cineverse::core::search::SearchController;
use cineverse::services::images::ImageUrls;
use cineverse::ui::page::SearchView;
use common::{client, empty_page, FakeTransport};
use serde_json::json;

#[tokio::test]
async fn test_search_without_results() {
    let client = client(FakeTransport::new().with("search/multi", empty_page()));
    let mut search = SearchController::new("batman");

    search.refresh(&client).await;

    let view = SearchView::build(&search, &ImageUrls::default());
    assert_eq!(view.heading, "Search Results for \"batman\"");
    assert!(view.grid.tiles.is_empty());
    assert_eq!(view.grid.placeholders, 0);

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("query"), Some("batman"));
    assert_eq!(calls[0].get("page"), Some("1"));
}

#[tokio::test]
async fn test_empty_query_issues_no_request() {
    let client = client(FakeTransport::new().with("search/multi", empty_page()));
    let mut search = SearchController::new("   ");

    search.refresh(&client).await;

    assert!(!search.is_loading());
    assert!(search.items().is_empty());
    assert!(client.transport().calls().is_empty());
    assert_eq!(search.heading(), "Search Results for \"\"");
}

#[tokio::test]
async fn test_mixed_results_keep_their_kinds() {
    let client = client(FakeTransport::new().with(
        "search/multi",
        json!({ "page": 1, "total_pages": 1, "results": [
            { "id": 272, "media_type": "movie", "title": "Batman Begins", "release_date": "2005-06-10" },
            { "id": 2098, "media_type": "tv", "name": "Batman: The Animated Series", "first_air_date": "1992-09-05" },
            { "id": 3894, "media_type": "person", "name": "Christian Bale" }
        ]}),
    ));
    let mut search = SearchController::new("batman");
    search.refresh(&client).await;

    let view = SearchView::build(&search, &ImageUrls::default());
    let routes: Vec<Option<&str>> = view.grid.tiles.iter().map(|t| t.route.as_deref()).collect();
    assert_eq!(routes, vec![Some("/movie/272"), Some("/tv/2098"), None]);
    assert_eq!(view.grid.tiles[1].name, "Batman: The Animated Series");
    // No poster path: placeholder image
    assert_eq!(view.grid.tiles[2].poster_url, "https://via.placeholder.com/300x450?text=No+Image");
}

#[tokio::test]
async fn test_stale_search_is_dropped() {
    let client = client(FakeTransport::new().with("search/multi", empty_page()));
    let mut search = SearchController::new("bat");

    let old = search.begin_fetch().unwrap();
    let new = search.set_query("batman").unwrap();
    let old_response = SearchController::fetch(&client, &old).await;
    let new_response = SearchController::fetch(&client, &new).await;

    assert!(search.apply(new_response));
    assert!(!search.apply(old_response));
    assert_eq!(search.query(), "batman");
}
