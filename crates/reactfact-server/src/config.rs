use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;

use reactfact_gif::GifConfig;
use reactfact_gif::tenor::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
    pub gif: GifConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("REACTFACT_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = var("REACTFACT_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("REACTFACT_PORT must be a port number")?;
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;

        let db_path = PathBuf::from(var("REACTFACT_DB_PATH").unwrap_or_else(|| "reactfact.db".into()));

        let timeout_secs: u64 = var("REACTFACT_GIF_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .context("REACTFACT_GIF_TIMEOUT_SECS must be a whole number of seconds")?;

        let gif = GifConfig {
            api_key: var("TENOR_API_KEY"),
            base_url: var("TENOR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self { addr, db_path, gif })
    }
}
