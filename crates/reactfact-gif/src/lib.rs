pub mod error;
pub mod fallback;
pub mod selector;
pub mod tenor;

use std::future::Future;
use std::time::Duration;

use tracing::info;

use reactfact_types::Gif;

pub use error::GifError;
pub use fallback::FallbackGifs;
pub use selector::GifSelector;
pub use tenor::TenorClient;

/// Anything that can answer GIF searches. Failures are absorbed: callers
/// only ever see a (possibly empty) list.
pub trait GifSource: Send + Sync {
    fn search(&self, query: &str) -> impl Future<Output = Vec<Gif>> + Send;
    fn trending(&self) -> impl Future<Output = Vec<Gif>> + Send;
}

#[derive(Debug, Clone)]
pub struct GifConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: tenor::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// The configured GIF backend.
pub enum GifLookup {
    Tenor(TenorClient),
    Fallback(FallbackGifs),
}

impl GifLookup {
    /// Tenor when an API key is present, the built-in catalogue otherwise.
    pub fn from_config(config: &GifConfig) -> Result<Self, GifError> {
        match config.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => {
                info!("GIF lookup: Tenor at {}", config.base_url);
                Ok(Self::Tenor(TenorClient::new(&config.base_url, key, config.timeout)?))
            }
            None => {
                info!("GIF lookup: no API key, using built-in catalogue");
                Ok(Self::Fallback(FallbackGifs))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Tenor(_) => "tenor",
            Self::Fallback(_) => "fallback",
        }
    }
}

impl GifSource for GifLookup {
    async fn search(&self, query: &str) -> Vec<Gif> {
        match self {
            Self::Tenor(client) => client.search(query).await,
            Self::Fallback(table) => table.search(query).await,
        }
    }

    async fn trending(&self) -> Vec<Gif> {
        match self {
            Self::Tenor(client) => client.trending().await,
            Self::Fallback(table) => table.trending().await,
        }
    }
}
