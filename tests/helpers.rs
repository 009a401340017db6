use async_trait::async_trait;
use axum::Router;
use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use url::Url;

use sell_copy::{
    app,
    app_state::AppState,
    extractor::{ExtractionPolicy, Extractor},
    fetcher::{FetchError, PageFetcher, PageResponse},
};

/// Serves canned pages by exact URL; anything else is a 404.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url.as_str()) {
            Some(html) => Ok(PageResponse::from_html(url.clone(), html.clone())),
            None => Err(FetchError::Http {
                status: reqwest::StatusCode::NOT_FOUND,
            }),
        }
    }
}

pub fn test_app(fetcher: Arc<StaticFetcher>, policy: ExtractionPolicy) -> Router {
    app::router(AppState::new(fetcher, Extractor::new(policy)))
}
