use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use reactfact_types::api::{GifPanel, GifTab};

use crate::GifSource;

struct Inner {
    panel: GifPanel,
    latest: u64,
}

/// State behind the GIF picker: active tab, last search, current results.
///
/// Every load takes a ticket. A response is applied only while its ticket
/// is still the newest, so a slow answer to an old request can't replace
/// the results of a newer one.
pub struct GifSelector<S> {
    source: S,
    inner: Mutex<Inner>,
}

impl<S: GifSource> GifSelector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                panel: GifPanel::default(),
                latest: 0,
            }),
        }
    }

    pub fn panel(&self) -> GifPanel {
        self.lock().panel.clone()
    }

    pub async fn select_tab(&self, tab: GifTab) -> GifPanel {
        self.load(tab, None).await
    }

    /// Free-text search within the current tab. Blank queries are ignored.
    pub async fn search(&self, query: &str) -> GifPanel {
        let query = query.trim();
        if query.is_empty() {
            return self.panel();
        }
        let tab = self.lock().panel.tab;
        self.load(tab, Some(query.to_string())).await
    }

    /// Re-run whatever produced the current results.
    pub async fn refresh(&self) -> GifPanel {
        let (tab, query) = {
            let inner = self.lock();
            (inner.panel.tab, inner.panel.query.clone())
        };
        self.load(tab, query).await
    }

    async fn load(&self, tab: GifTab, query: Option<String>) -> GifPanel {
        let ticket = {
            let mut inner = self.lock();
            inner.latest += 1;
            inner.panel.tab = tab;
            inner.panel.query = query.clone();
            inner.panel.loading = true;
            inner.latest
        };

        let gifs = match (&query, tab) {
            (Some(q), _) => self.source.search(q).await,
            (None, GifTab::Trending) => self.source.trending().await,
            (None, other) => self.source.search(other.as_str()).await,
        };

        let mut inner = self.lock();
        if inner.latest == ticket {
            inner.panel.gifs = gifs;
            inner.panel.loading = false;
        } else {
            debug!("Dropping stale GIF response #{} (latest is #{})", ticket, inner.latest);
        }
        inner.panel.clone()
    }

    // The panel is plain data; a panic elsewhere can't leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
