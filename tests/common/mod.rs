//! Shared fixtures: an in-memory TMDB transport with canned payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use cineverse::error::{FetchResult, RequestError};
use cineverse::services::tmdb::{Endpoint, TmdbClient, Transport};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned JSON keyed by path (or `path?page=N`) and records every
/// request. Unknown paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    bodies: HashMap<String, String>,
    calls: Mutex<Vec<Endpoint>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `body` for any page.
    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.bodies.insert(path.to_string(), body.to_string());
        self
    }

    /// Answer `path` with `body` for one page only.
    pub fn with_page(mut self, path: &str, page: u32, body: Value) -> Self {
        self.bodies
            .insert(format!("{}?page={}", path, page), body.to_string());
        self
    }

    /// Stop serving `path`; it answers 404 from now on.
    pub fn without(mut self, path: &str) -> Self {
        self.bodies.remove(path);
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests made to `path`.
    pub fn count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.path == path)
            .count()
    }

    fn lookup(&self, endpoint: &Endpoint) -> Option<&String> {
        endpoint
            .get("page")
            .and_then(|page| self.bodies.get(&format!("{}?page={}", endpoint.path, page)))
            .or_else(|| self.bodies.get(&endpoint.path))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, endpoint: &Endpoint) -> FetchResult<String> {
        self.calls.lock().unwrap().push(endpoint.clone());
        self.lookup(endpoint).cloned().ok_or_else(|| RequestError::Status {
            status: 404,
            path: endpoint.path.clone(),
        })
    }
}

pub fn client(transport: FakeTransport) -> TmdbClient<FakeTransport> {
    colored::control::set_override(false);
    TmdbClient::new(transport)
}

/// A listing page of `count` movies with ids starting at `first_id`.
pub fn movie_page(first_id: u64, count: u64, page: u32, total_pages: u32) -> Value {
    let results: Vec<Value> = (first_id..first_id + count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Movie {}", id),
                "release_date": "2024-05-01",
                "poster_path": format!("/poster{}.jpg", id),
                "backdrop_path": format!("/backdrop{}.jpg", id),
                "overview": "An overview."
            })
        })
        .collect();
    json!({ "page": page, "total_pages": total_pages, "results": results })
}

pub fn empty_page() -> Value {
    json!({ "page": 1, "total_pages": 1, "results": [] })
}

pub fn movie_genres() -> Value {
    json!({ "genres": [
        { "id": 28, "name": "Action" },
        { "id": 35, "name": "Comedy" },
        { "id": 878, "name": "Science Fiction" }
    ]})
}

/// Every sub-fetch of a movie detail page, all successful.
pub fn movie_detail_transport(id: u64) -> FakeTransport {
    let base = format!("movie/{}", id);
    FakeTransport::new()
        .with(
            &base,
            json!({
                "id": id,
                "title": "Inception",
                "overview": "A thief who steals corporate secrets.",
                "release_date": "2010-07-15",
                "runtime": 148,
                "vote_average": 8.37,
                "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
                "poster_path": "/poster.jpg",
                "backdrop_path": "/backdrop.jpg"
            }),
        )
        .with(
            &format!("{}/credits", base),
            json!({
                "cast": [
                    { "name": "Leonardo DiCaprio", "character": "Cobb", "profile_path": "/leo.jpg" },
                    { "name": "Joseph Gordon-Levitt", "character": "Arthur" }
                ],
                "crew": [
                    { "name": "Christopher Nolan", "job": "Director" },
                    { "name": "Christopher Nolan", "job": "Writer" },
                    { "name": "Hans Zimmer", "job": "Original Music Composer" }
                ]
            }),
        )
        .with(
            &format!("{}/videos", base),
            json!({ "results": [
                { "key": "tease", "name": "Teaser", "site": "YouTube", "type": "Teaser" },
                { "key": "YoHD9XEInc0", "name": "Official Trailer", "site": "YouTube", "type": "Trailer" }
            ]}),
        )
        .with(
            &format!("{}/images", base),
            json!({ "backdrops": [{ "file_path": "/shot1.jpg" }, { "file_path": "/shot2.jpg" }] }),
        )
        .with(
            &format!("{}/reviews", base),
            json!({ "page": 1, "total_pages": 1, "results": [
                { "id": "r1", "author": "critic", "content": "Mind bending.", "created_at": "2021-03-04T10:00:00.000Z" }
            ]}),
        )
        .with(&format!("{}/similar", base), movie_page(900, 8, 1, 3))
        .with(
            &format!("{}/watch/providers", base),
            json!({ "results": {
                "IN": { "rent": [{ "provider_id": 2, "provider_name": "Apple TV", "logo_path": "/apple.png" }] }
            }}),
        )
}

/// A TV show with two seasons plus the episode lists for both.
pub fn tv_detail_transport(id: u64) -> FakeTransport {
    let base = format!("tv/{}", id);
    let episodes = |season: u32| {
        json!({ "episodes": [
            { "id": season * 100 + 1, "episode_number": 1, "name": format!("S{} Premiere", season), "runtime": 57, "vote_average": 8.1 },
            { "id": season * 100 + 2, "episode_number": 2, "name": format!("S{} Second", season), "runtime": 0 }
        ]})
    };
    FakeTransport::new()
        .with(
            &base,
            json!({
                "id": id,
                "name": "Game of Thrones",
                "first_air_date": "2011-04-17",
                "episode_run_time": [60],
                "number_of_episodes": 73,
                "vote_average": 8.4,
                "created_by": [{ "name": "David Benioff" }, { "name": "D. B. Weiss" }],
                "seasons": [
                    { "season_number": 1, "name": "Season 1", "episode_count": 10, "air_date": "2011-04-17" },
                    { "season_number": 2, "name": "Season 2", "episode_count": 10, "air_date": "2012-04-01" }
                ]
            }),
        )
        .with(&format!("{}/credits", base), json!({ "cast": [], "crew": [] }))
        .with(&format!("{}/videos", base), json!({ "results": [] }))
        .with(&format!("{}/images", base), json!({ "backdrops": [] }))
        .with(&format!("{}/reviews", base), empty_page())
        .with(&format!("{}/similar", base), empty_page())
        .with(&format!("{}/watch/providers", base), json!({ "results": {} }))
        .with(&format!("{}/season/1", base), episodes(1))
        .with(&format!("{}/season/2", base), episodes(2))
}

/// Credits with `count` cast members and as many writers.
pub fn crowded_credits(count: usize) -> Value {
    let cast: Vec<Value> = (1..=count)
        .map(|i| json!({ "name": format!("Actor {}", i), "character": format!("Role {}", i) }))
        .collect();
    let crew: Vec<Value> = (1..=count)
        .map(|i| json!({ "name": format!("Writer {}", i), "job": "Screenplay" }))
        .collect();
    json!({ "cast": cast, "crew": crew })
}

/// `count` backdrop images.
pub fn backdrops(count: usize) -> Value {
    let backdrops: Vec<Value> = (1..=count)
        .map(|i| json!({ "file_path": format!("/shot{}.jpg", i) }))
        .collect();
    json!({ "backdrops": backdrops })
}

/// A first page of `count` reviews.
pub fn reviews(count: usize) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": format!("r{}", i),
                "author": format!("reviewer{}", i),
                "content": "Worth a watch.",
                "created_at": "2022-01-02T03:04:05.000Z"
            })
        })
        .collect();
    json!({ "page": 1, "total_pages": 1, "results": results })
}

/// Streaming offers by region code.
pub fn streaming_in(regions: &[(&str, &str)]) -> Value {
    let results: serde_json::Map<String, Value> = regions
        .iter()
        .map(|(region, provider)| {
            let offer = json!({ "flatrate": [{
                "provider_id": 8,
                "provider_name": provider,
                "logo_path": "/stream.png"
            }]});
            (region.to_string(), offer)
        })
        .collect();
    json!({ "results": results })
}
