//! Integration tests for routing between pages.

mod common;

use cineverse::cli::commands::open::{apply_options, OpenOptions};
use cineverse::cli::commands::shell::{run, Outcome, ShellCommand};
use cineverse::core::navigator::{ActivePage, Navigator};
use cineverse::core::page_state::BrowseMode;
use cineverse::core::route::Route;
use cineverse::models::media::MediaKind;
use cineverse::services::images::ImageUrls;
use common::{client, empty_page, movie_genres, movie_page, FakeTransport};

fn movies_transport() -> FakeTransport {
    common::movie_detail_transport(3)
        .with("trending/movie/week", movie_page(1, 10, 1, 2))
        .with("genre/movie/list", movie_genres())
        .with("discover/movie", movie_page(50, 10, 1, 9))
        .with("search/multi", empty_page())
}

async fn open(route: Route) -> Navigator<FakeTransport> {
    Navigator::open(client(movies_transport()), ImageUrls::default(), route).await
}

#[tokio::test]
async fn test_open_listed_title_goes_to_detail() {
    let mut nav = open(Route::Movies).await;

    assert!(nav.open_listed(3).await);

    assert_eq!(nav.route(), &Route::Detail(MediaKind::Movie, 3));
    match nav.page() {
        ActivePage::Detail(detail) => assert_eq!(detail.view().unwrap().detail.name, "Inception"),
        other => panic!("Expected detail page, got {:?}", other),
    }
    assert!(!nav.open_listed(0).await);
}

#[tokio::test]
async fn test_pagination_buttons_respect_bounds() {
    let mut nav = open(Route::Movies).await;

    assert!(!nav.prev_page().await);
    assert!(nav.next_page().await);
    // Two pages in total
    assert!(!nav.next_page().await);
    assert!(nav.prev_page().await);
    assert_eq!(nav.client().transport().count("trending/movie/week"), 3);
}

#[tokio::test]
async fn test_genre_only_selectable_in_genre_mode() {
    let mut nav = open(Route::Movies).await;
    assert!(!nav.select_genre("action").await);

    assert!(nav.select_mode(BrowseMode::Genre).await);
    assert!(nav.select_genre("Science Fiction").await);
    assert!(!nav.select_genre("Western").await);

    let last = nav.client().transport().calls().pop().unwrap();
    assert_eq!(last.get("with_genres"), Some("878"));
}

#[tokio::test]
async fn test_navigation_discards_page_state() {
    let mut nav = open(Route::Movies).await;
    nav.select_mode(BrowseMode::Genre).await;

    nav.navigate(Route::Home).await;
    nav.navigate(Route::Movies).await;

    match nav.page() {
        ActivePage::Browse(browse) => {
            assert_eq!(browse.state().mode(), BrowseMode::Trending);
            assert_eq!(browse.state().page(), 1);
        }
        other => panic!("Expected browse page, got {:?}", other),
    }
}

#[tokio::test]
async fn test_open_options_replay_controls() {
    let mut nav = open(Route::Movies).await;
    let options = OpenOptions {
        mode: Some("genre".to_string()),
        genre: Some("28".to_string()),
        page: Some(4),
        season: None,
    };

    apply_options(&mut nav, &options).await.unwrap();

    let last = nav.client().transport().calls().pop().unwrap();
    assert_eq!(last.path, "discover/movie");
    assert_eq!(last.get("with_genres"), Some("28"));
    assert_eq!(last.get("page"), Some("4"));
}

#[tokio::test]
async fn test_open_options_reject_out_of_range_page() {
    let mut nav = open(Route::Movies).await;
    let options = OpenOptions {
        page: Some(3),
        ..Default::default()
    };

    assert!(apply_options(&mut nav, &options).await.is_err());
}

#[tokio::test]
async fn test_shell_search_navigates() {
    let mut nav = open(Route::Home).await;

    let blank = run(&mut nav, ShellCommand::Search("  ".to_string())).await;
    assert_eq!(blank, Outcome::Ignored);
    assert_eq!(nav.route(), &Route::Home);

    let outcome = run(&mut nav, "search the matrix".parse().unwrap()).await;
    assert_eq!(outcome, Outcome::Redraw);
    assert_eq!(nav.route().to_string(), "/search?q=the%20matrix");
    assert!(nav.render().contains("Search Results for \"the matrix\""));
}

#[tokio::test]
async fn test_season_command_needs_a_listed_season() {
    let client = client(common::tv_detail_transport(1399));
    let route = Route::Detail(MediaKind::Tv, 1399);
    let mut nav = Navigator::open(client, ImageUrls::default(), route).await;

    assert!(!nav.toggle_season(7).await);
    assert_eq!(nav.client().transport().count("tv/1399/season/7"), 0);

    assert!(nav.toggle_season(1).await);
    match nav.page() {
        ActivePage::Detail(detail) => assert_eq!(detail.expanded_season(), Some(1)),
        other => panic!("Expected detail page, got {:?}", other),
    }
}
