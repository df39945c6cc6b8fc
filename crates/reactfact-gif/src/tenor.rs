use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use reactfact_types::Gif;

use crate::GifSource;
use crate::error::GifError;

pub const DEFAULT_BASE_URL: &str = "https://tenor.googleapis.com/v2";

const SEARCH_LIMIT: u32 = 12;
const TRENDING_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
struct TenorResponse {
    #[serde(default)]
    results: Vec<TenorResult>,
}

#[derive(Debug, Deserialize)]
struct TenorResult {
    id: String,
    #[serde(default)]
    media_formats: HashMap<String, MediaFormat>,
}

#[derive(Debug, Deserialize)]
struct MediaFormat {
    url: String,
    #[serde(default)]
    preview: Option<String>,
}

/// Read-only client for the Tenor v2 search API.
pub struct TenorClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TenorClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, GifError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET /search?key=&q=&limit=12&media_filter=minimal&contentfilter=medium
    pub async fn try_search(&self, query: &str) -> Result<Vec<Gif>, GifError> {
        let limit = SEARCH_LIMIT.to_string();
        let params = [
            ("key", self.api_key.as_str()),
            ("q", query),
            ("limit", limit.as_str()),
            ("media_filter", "minimal"),
            ("contentfilter", "medium"),
        ];
        self.fetch("search", &params).await
    }

    /// GET /featured?key=&limit=20&media_filter=gif
    pub async fn try_trending(&self) -> Result<Vec<Gif>, GifError> {
        let limit = TRENDING_LIMIT.to_string();
        let params = [
            ("key", self.api_key.as_str()),
            ("limit", limit.as_str()),
            ("media_filter", "gif"),
        ];
        self.fetch("featured", &params).await
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Gif>, GifError> {
        let resp = self
            .http
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(params)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(GifError::Status(resp.status()));
        }

        let body: TenorResponse = resp.json().await?;
        let gifs = map_results(body.results);
        debug!("Tenor /{} returned {} GIFs", endpoint, gifs.len());
        Ok(gifs)
    }
}

/// Results without a `gif` rendition are dropped. The preview falls back
/// to the full GIF when Tenor omits it.
fn map_results(results: Vec<TenorResult>) -> Vec<Gif> {
    results
        .into_iter()
        .filter_map(|mut r| {
            let gif = r.media_formats.remove("gif")?;
            let preview = gif
                .preview
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| gif.url.clone());
            Some(Gif {
                id: r.id,
                url: gif.url,
                preview,
            })
        })
        .collect()
}

impl GifSource for TenorClient {
    async fn search(&self, query: &str) -> Vec<Gif> {
        self.try_search(query).await.unwrap_or_else(|e| {
            warn!("GIF search for '{}' failed: {}", query, e);
            Vec::new()
        })
    }

    async fn trending(&self) -> Vec<Gif> {
        self.try_trending().await.unwrap_or_else(|e| {
            warn!("Trending GIFs failed: {}", e);
            Vec::new()
        })
    }
}
