use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use once_cell::sync::Lazy;
use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) SellCopyBot/1.0 (+https://sell-copy-api.onrender.com/privacy)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = HeaderMap::new();
            headers.insert(
                ACCEPT,
                HeaderValue::from_static(
                    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                ),
            );
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ja,en;q=0.8"));
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Source of product page markup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError>;
}

/// Fetches pages over the network with the shared client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError> {
        fetch(url.as_str()).await
    }
}

#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<PageResponse, FetchError> {
    let parsed_url = Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Declared length; the streamed total is checked again below.
    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let status = response.status();
    let headers = response.headers().clone();

    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let content_type = headers
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("text/html")
        .to_string();

    let body_bytes = read_capped_body(response, MAX_BODY_SIZE).await?;

    debug!(
        %status,
        content_type = %content_type,
        bytes = body_bytes.len(),
        "page downloaded"
    );

    Ok(process_response(
        final_url,
        status,
        headers,
        body_bytes,
        &content_type,
    ))
}

/// Reads the body chunk by chunk, giving up as soon as it passes `limit`.
async fn read_capped_body(mut response: Response, limit: u64) -> Result<Bytes, FetchError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(FetchError::from_reqwest_error)?
    {
        let received = (body.len() + chunk.len()) as u64;
        if received > limit {
            return Err(FetchError::BodyTooLarge(received));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
