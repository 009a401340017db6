use axum::http::StatusCode;
use thiserror::Error;

use crate::extractor::ExtractionError;
use crate::fetcher::FetchError;

/// Everything that can stop one extract-and-copy call.
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("failed to fetch page: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("extraction task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl CopyError {
    /// Caller-caused failures are 422; a crashed extraction task is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
