//! TMDB API client.
//!
//! Requests go through a [`Transport`] so that the same typed client can
//! talk to the real API over `reqwest` or to canned payloads in tests.
//! Every operation is first-success-or-fail: no retries, no caching.

use crate::error::{FetchResult, RequestError};
use crate::models::config::TmdbConfig;
use crate::models::media::{
    CastMember, CreditsInfo, CrewMember, EntryKind, Episode, Genre, MediaKind, Page, Provider,
    Review, SeasonSummary, TitleDetail, TitleSummary, Video, WatchProviders,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// How the client authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// v4 read access token, sent as `Authorization: Bearer`.
    Bearer(String),
    /// v3 API key, sent as the `api_key` query parameter.
    ApiKey(String),
}

impl Credentials {
    /// Pick credentials from config. An access token wins over an API key.
    pub fn from_config(config: &TmdbConfig) -> crate::Result<Self> {
        if let Some(token) = config.access_token.as_ref().filter(|t| !t.is_empty()) {
            return Ok(Credentials::Bearer(token.clone()));
        }
        match config.api_key.as_ref().filter(|k| !k.is_empty()) {
            // Bearer tokens start with "eyJ" (base64 encoded JWT header)
            Some(key) if key.starts_with("eyJ") => Ok(Credentials::Bearer(key.clone())),
            Some(key) => Ok(Credentials::ApiKey(key.clone())),
            None => Err(crate::Error::TmdbCredentialsMissing),
        }
    }
}

/// A relative API path plus query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param<V: ToString>(mut self, key: &str, value: V) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Value of a query parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Performs one GET and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, endpoint: &Endpoint) -> FetchResult<String>;
}

/// `reqwest` transport against the live API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    language: String,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(config: &TmdbConfig, credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            credentials,
        }
    }

    /// Build a request with proper authentication.
    fn build_request(&self, endpoint: &Endpoint) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint.path);
        let mut query: Vec<(&str, &str)> = vec![("language", self.language.as_str())];
        query.extend(endpoint.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        match &self.credentials {
            Credentials::Bearer(token) => self
                .client
                .get(url)
                .query(&query)
                .header("Authorization", format!("Bearer {}", token)),
            Credentials::ApiKey(key) => {
                query.push(("api_key", key.as_str()));
                self.client.get(url).query(&query)
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &Endpoint) -> FetchResult<String> {
        tracing::debug!("GET /{}", endpoint.path);
        let resp = self.build_request(endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                path: endpoint.path.clone(),
            });
        }
        Ok(resp.text().await?)
    }
}

/// Time window for trending listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingWindow {
    Day,
    Week,
}

impl TrendingWindow {
    fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

// ---- Raw payloads ----

#[derive(Debug, Deserialize)]
struct RawPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct RawListEntry {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    media_type: Option<String>,
}

impl RawListEntry {
    /// `listing` is the kind of the endpoint that produced the entry, if it
    /// was kind-specific.
    fn normalize(self, listing: Option<MediaKind>) -> TitleSummary {
        let kind = match self.media_type.as_deref() {
            Some("movie") => EntryKind::Title(MediaKind::Movie),
            Some("tv") => EntryKind::Title(MediaKind::Tv),
            Some("person") => EntryKind::Person,
            _ => match listing {
                Some(kind) => EntryKind::Title(kind),
                None if self.title.is_some() => EntryKind::Title(MediaKind::Movie),
                None => EntryKind::Title(MediaKind::Tv),
            },
        };

        TitleSummary {
            id: self.id,
            name: self.title.or(self.name).unwrap_or_default(),
            date: non_empty(self.release_date.or(self.first_air_date)),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: non_empty(self.overview),
            kind,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGenres {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawSeason {
    season_number: u32,
    #[serde(default)]
    name: String,
    air_date: Option<String>,
    #[serde(default)]
    episode_count: u32,
    overview: Option<String>,
    poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    id: u64,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default)]
    episode_run_time: Vec<u32>,
    #[serde(default)]
    genres: Vec<Genre>,
    vote_average: Option<f32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    number_of_episodes: Option<u32>,
    #[serde(default)]
    created_by: Vec<RawNamed>,
    #[serde(default)]
    seasons: Vec<RawSeason>,
}

#[derive(Debug, Deserialize)]
struct RawCast {
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCrew {
    name: String,
    #[serde(default)]
    job: String,
}

#[derive(Debug, Deserialize)]
struct RawCredits {
    #[serde(default)]
    cast: Vec<RawCast>,
    #[serde(default)]
    crew: Vec<RawCrew>,
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    site: String,
    #[serde(rename = "type", default)]
    video_type: String,
}

#[derive(Debug, Deserialize)]
struct RawVideos {
    #[serde(default)]
    results: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
struct RawImage {
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct RawImages {
    #[serde(default)]
    backdrops: Vec<RawImage>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    id: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    content: String,
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProvider {
    provider_id: u64,
    provider_name: String,
    logo_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRegionOffers {
    flatrate: Option<Vec<RawProvider>>,
    rent: Option<Vec<RawProvider>>,
    buy: Option<Vec<RawProvider>>,
}

#[derive(Debug, Deserialize)]
struct RawWatchProviders {
    #[serde(default)]
    results: HashMap<String, RawRegionOffers>,
}

#[derive(Debug, Deserialize)]
struct RawEpisode {
    id: u64,
    episode_number: u32,
    #[serde(default)]
    name: String,
    overview: Option<String>,
    still_path: Option<String>,
    runtime: Option<u32>,
    vote_average: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct RawSeasonDetails {
    #[serde(default)]
    episodes: Vec<RawEpisode>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn providers(list: Option<Vec<RawProvider>>) -> Option<Vec<Provider>> {
    list.map(|items| {
        items
            .into_iter()
            .map(|p| Provider {
                id: p.provider_id,
                name: p.provider_name,
                logo_path: p.logo_path,
            })
            .collect()
    })
}

/// TMDB API client.
pub struct TmdbClient<T: Transport = HttpTransport> {
    transport: T,
    region: String,
    fallback_region: String,
}

impl TmdbClient<HttpTransport> {
    /// Create a live client from configuration.
    pub fn from_config(config: &TmdbConfig) -> crate::Result<Self> {
        let credentials = Credentials::from_config(config)?;
        Ok(Self::new(HttpTransport::new(config, credentials))
            .with_regions(&config.region, &config.fallback_region))
    }
}

impl<T: Transport> TmdbClient<T> {
    /// Create a client over any transport. Regions default to `IN` then `US`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            region: "IN".to_string(),
            fallback_region: "US".to_string(),
        }
    }

    /// Set the watch-provider region order.
    pub fn with_regions(mut self, region: &str, fallback: &str) -> Self {
        self.region = region.to_string();
        self.fallback_region = fallback.to_string();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> FetchResult<R> {
        let body = self.transport.get(&endpoint).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_list(
        &self,
        endpoint: Endpoint,
        listing: Option<MediaKind>,
    ) -> FetchResult<Page<TitleSummary>> {
        let raw: RawPage<RawListEntry> = self.fetch(endpoint).await?;
        Ok(Page {
            results: raw
                .results
                .into_iter()
                .map(|entry| entry.normalize(listing))
                .collect(),
            page: raw.page.max(1),
            total_pages: raw.total_pages.max(1),
        })
    }

    /// Verify the configured credentials are accepted.
    pub async fn verify_credentials(&self) -> FetchResult<bool> {
        match self.transport.get(&Endpoint::new("authentication")).await {
            Ok(_) => Ok(true),
            Err(RequestError::Status { status: 401, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Trending titles. `None` lists movies and TV together.
    pub async fn trending(
        &self,
        kind: Option<MediaKind>,
        window: TrendingWindow,
        page: u32,
    ) -> FetchResult<Page<TitleSummary>> {
        let scope = kind.map(|k| k.as_str()).unwrap_or("all");
        let endpoint =
            Endpoint::new(format!("trending/{}/{}", scope, window.as_str())).param("page", page);
        self.fetch_list(endpoint, kind).await
    }

    /// Top rated titles.
    pub async fn top_rated(&self, kind: MediaKind, page: u32) -> FetchResult<Page<TitleSummary>> {
        let endpoint = Endpoint::new(format!("{}/top_rated", kind)).param("page", page);
        self.fetch_list(endpoint, Some(kind)).await
    }

    /// Now-playing movies or on-the-air TV.
    pub async fn latest(&self, kind: MediaKind, page: u32) -> FetchResult<Page<TitleSummary>> {
        let path = match kind {
            MediaKind::Movie => "movie/now_playing",
            MediaKind::Tv => "tv/on_the_air",
        };
        self.fetch_list(Endpoint::new(path).param("page", page), Some(kind))
            .await
    }

    /// Popular titles, optionally restricted to one genre.
    pub async fn discover(
        &self,
        kind: MediaKind,
        genre: Option<u64>,
        page: u32,
    ) -> FetchResult<Page<TitleSummary>> {
        let mut endpoint = Endpoint::new(format!("discover/{}", kind))
            .param("sort_by", "popularity.desc")
            .param("page", page);
        if let Some(genre) = genre {
            endpoint = endpoint.param("with_genres", genre);
        }
        self.fetch_list(endpoint, Some(kind)).await
    }

    /// Search movies, TV and people at once.
    pub async fn search_multi(&self, query: &str, page: u32) -> FetchResult<Page<TitleSummary>> {
        let endpoint = Endpoint::new("search/multi")
            .param("query", query)
            .param("page", page);
        self.fetch_list(endpoint, None).await
    }

    /// Genre list for one kind.
    pub async fn genres(&self, kind: MediaKind) -> FetchResult<Vec<Genre>> {
        let raw: RawGenres = self
            .fetch(Endpoint::new(format!("genre/{}/list", kind)))
            .await?;
        Ok(raw.genres)
    }

    /// Title details. TV details include the season list.
    pub async fn details(&self, kind: MediaKind, id: u64) -> FetchResult<TitleDetail> {
        let raw: RawDetails = self.fetch(Endpoint::new(format!("{}/{}", kind, id))).await?;
        Ok(TitleDetail {
            id: raw.id,
            kind,
            name: raw.title.or(raw.name).unwrap_or_default(),
            overview: non_empty(raw.overview),
            date: non_empty(raw.release_date.or(raw.first_air_date)),
            runtime: raw.runtime.or_else(|| raw.episode_run_time.first().copied()),
            genres: raw.genres,
            vote_average: raw.vote_average,
            poster_path: raw.poster_path,
            backdrop_path: raw.backdrop_path,
            number_of_episodes: raw.number_of_episodes,
            created_by: raw.created_by.into_iter().map(|c| c.name).collect(),
            seasons: raw
                .seasons
                .into_iter()
                .map(|s| SeasonSummary {
                    season_number: s.season_number,
                    name: s.name,
                    air_date: non_empty(s.air_date),
                    episode_count: s.episode_count,
                    overview: non_empty(s.overview),
                    poster_path: s.poster_path,
                })
                .collect(),
        })
    }

    /// Cast and crew.
    pub async fn credits(&self, kind: MediaKind, id: u64) -> FetchResult<CreditsInfo> {
        let raw: RawCredits = self
            .fetch(Endpoint::new(format!("{}/{}/credits", kind, id)))
            .await?;
        Ok(CreditsInfo {
            cast: raw
                .cast
                .into_iter()
                .map(|c| CastMember {
                    name: c.name,
                    character: non_empty(c.character),
                    profile_path: c.profile_path,
                })
                .collect(),
            crew: raw
                .crew
                .into_iter()
                .map(|c| CrewMember {
                    name: c.name,
                    job: c.job,
                })
                .collect(),
        })
    }

    /// Videos attached to a title.
    pub async fn videos(&self, kind: MediaKind, id: u64) -> FetchResult<Vec<Video>> {
        let raw: RawVideos = self
            .fetch(Endpoint::new(format!("{}/{}/videos", kind, id)))
            .await?;
        Ok(raw
            .results
            .into_iter()
            .map(|v| Video {
                key: v.key,
                name: v.name,
                site: v.site,
                video_type: v.video_type,
            })
            .collect())
    }

    /// Backdrop image paths.
    pub async fn images(&self, kind: MediaKind, id: u64) -> FetchResult<Vec<String>> {
        let raw: RawImages = self
            .fetch(Endpoint::new(format!("{}/{}/images", kind, id)))
            .await?;
        Ok(raw.backdrops.into_iter().map(|b| b.file_path).collect())
    }

    /// First page of user reviews.
    pub async fn reviews(&self, kind: MediaKind, id: u64) -> FetchResult<Vec<Review>> {
        let raw: RawPage<RawReview> = self
            .fetch(Endpoint::new(format!("{}/{}/reviews", kind, id)))
            .await?;
        Ok(raw
            .results
            .into_iter()
            .map(|r| Review {
                id: r.id,
                author: r.author,
                content: r.content,
                created_at: r.created_at,
            })
            .collect())
    }

    /// First page of similar titles.
    pub async fn similar(&self, kind: MediaKind, id: u64) -> FetchResult<Vec<TitleSummary>> {
        let endpoint = Endpoint::new(format!("{}/{}/similar", kind, id)).param("page", 1);
        Ok(self.fetch_list(endpoint, Some(kind)).await?.results)
    }

    /// Offers for the configured region, else the fallback region.
    pub async fn watch_providers(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> FetchResult<Option<WatchProviders>> {
        let mut raw: RawWatchProviders = self
            .fetch(Endpoint::new(format!("{}/{}/watch/providers", kind, id)))
            .await?;

        for region in [&self.region, &self.fallback_region] {
            if let Some(offers) = raw.results.remove(region.as_str()) {
                return Ok(Some(WatchProviders {
                    region: region.clone(),
                    flatrate: providers(offers.flatrate),
                    rent: providers(offers.rent),
                    buy: providers(offers.buy),
                }));
            }
        }
        Ok(None)
    }

    /// Episodes of one season.
    pub async fn season_episodes(&self, tv_id: u64, season: u32) -> FetchResult<Vec<Episode>> {
        let raw: RawSeasonDetails = self
            .fetch(Endpoint::new(format!("tv/{}/season/{}", tv_id, season)))
            .await?;
        Ok(raw
            .episodes
            .into_iter()
            .map(|e| Episode {
                id: e.id,
                episode_number: e.episode_number,
                name: e.name,
                overview: non_empty(e.overview),
                still_path: e.still_path,
                runtime: e.runtime.filter(|r| *r > 0),
                vote_average: e.vote_average,
            })
            .collect())
    }
}
