use crate::extractor::{ExtractionPolicy, Extractor, default_fallback};
use crate::fetcher::{HttpFetcher, PageFetcher};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn PageFetcher + Send + Sync>,
    pub extractor: Extractor,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>, extractor: Extractor) -> Self {
        Self { fetcher, extractor }
    }

    /// Network fetcher, first-match extraction, and whatever whole-page
    /// fallback this build ships with.
    pub fn live() -> Self {
        Self::new(
            Arc::new(HttpFetcher),
            Extractor::new(ExtractionPolicy::FirstMatch).with_fallback(default_fallback()),
        )
    }
}
