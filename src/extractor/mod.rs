pub mod cleaner;
pub mod model;
pub mod reader;
pub mod reject;
pub mod rules;
pub mod text;

#[cfg(test)]
mod tests;

pub use model::ExtractionPolicy;
pub use reader::{ContentFallback, default_fallback};

use scraper::Html;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use crate::extractor::text::{char_len, normalize_whitespace, visible_text};

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("description could not be extracted")]
    NoDescription,
}

/// Pulls the product description out of a fetched page.
#[derive(Clone, Default)]
pub struct Extractor {
    policy: ExtractionPolicy,
    fallback: Option<Arc<dyn ContentFallback>>,
}

impl Extractor {
    pub fn new(policy: ExtractionPolicy) -> Self {
        Self {
            policy,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Option<Arc<dyn ContentFallback>>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Runs the rule-driven scan over `html`, falling back to whole-page
    /// extraction when configured.
    ///
    /// `url` selects the site rules; it should be the URL the caller asked
    /// for, not wherever redirects ended up.
    #[instrument(skip_all, fields(url = %url, policy = ?self.policy))]
    pub fn extract(&self, html: &str, url: &Url) -> Result<String, ExtractionError> {
        let rules = rules::resolve(url);
        debug!(rules = rules.host, "resolved site rules");

        if let Some(description) = self.scan(html, rules) {
            info!(chars = char_len(&description), "description found by selector");
            return Ok(description);
        }

        if let Some(fallback) = &self.fallback
            && let Some(text) = fallback.extract(html, url)
        {
            let description = normalize_whitespace(&text);
            if !reject::should_reject_fallback(&description) {
                info!(chars = char_len(&description), "description found by fallback");
                return Ok(description);
            }
            debug!(chars = char_len(&description), "fallback text too short");
        }

        Err(ExtractionError::NoDescription)
    }

    fn scan(&self, html: &str, rules: &rules::DomainRuleSet) -> Option<String> {
        let mut document = Html::parse_document(html);
        cleaner::sanitize(&mut document, rules.exclude);

        let root = document.root_element();
        let mut best: Option<String> = None;

        for raw in rules.include {
            let Some(selector) = rules::parse_selector(raw) else {
                continue;
            };

            for element in root.select(&selector) {
                let candidate = normalize_whitespace(&visible_text(element));
                if reject::should_reject(&candidate) {
                    continue;
                }

                match self.policy {
                    ExtractionPolicy::FirstMatch => {
                        debug!(selector = raw, "first qualifying candidate");
                        return Some(candidate);
                    }
                    ExtractionPolicy::Longest => {
                        if best
                            .as_deref()
                            .is_none_or(|current| char_len(&candidate) > char_len(current))
                        {
                            debug!(
                                selector = raw,
                                chars = char_len(&candidate),
                                "new longest candidate"
                            );
                            best = Some(candidate);
                        }
                    }
                }
            }
        }

        best
    }
}
