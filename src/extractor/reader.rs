//! Whole-page fallback used when no include selector yields a description.

use url::Url;

/// Best-effort main-content extraction over a complete document.
pub trait ContentFallback: Send + Sync {
    /// Plain text of the page's main content, or `None` when nothing usable
    /// was found.
    fn extract(&self, html: &str, url: &Url) -> Option<String>;
}

/// Readability-style boilerplate removal.
#[cfg(feature = "readability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadabilityFallback;

#[cfg(feature = "readability")]
impl ContentFallback for ReadabilityFallback {
    fn extract(&self, html: &str, url: &Url) -> Option<String> {
        match readability::extractor::extract(&mut html.as_bytes(), url) {
            Ok(article) if !article.text.trim().is_empty() => Some(article.text),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(error = ?err, "readability fallback failed");
                None
            }
        }
    }
}

/// The fallback compiled into this build, if any.
pub fn default_fallback() -> Option<std::sync::Arc<dyn ContentFallback>> {
    #[cfg(feature = "readability")]
    {
        Some(std::sync::Arc::new(ReadabilityFallback))
    }
    #[cfg(not(feature = "readability"))]
    {
        tracing::info!("built without readability; whole-page fallback disabled");
        None
    }
}
