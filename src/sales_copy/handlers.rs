use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{Span, info, instrument, warn};

use crate::{
    app_state::AppState,
    copywriter::{self, CopyOptions},
    sales_copy::{
        dtos::{ErrorResponse, ExtractRequest, ExtractResponse},
        errors::CopyError,
    },
};

#[utoipa::path(
    post,
    path = "/extract-and-copy",
    tag = "copy",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Description extracted and copy generated", body = ExtractResponse),
        (status = 422, description = "Invalid URL, unreachable page, or no description found", body = ErrorResponse),
        (status = 500, description = "Extraction task crashed", body = ErrorResponse)
    )
)]
#[instrument(skip_all, fields(url, tone, platform))]
pub async fn extract_and_copy(
    State(state): State<AppState>,
    Json(payload): Json<ExtractRequest>,
) -> Response {
    let span = Span::current();
    span.record("url", payload.url.as_str());
    span.record("tone", payload.tone.as_str());
    span.record("platform", payload.platform.as_str());

    match run(&state, &payload).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => {
            warn!(%error, "extract-and-copy failed");
            (
                error.status(),
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn run(state: &AppState, payload: &ExtractRequest) -> Result<ExtractResponse, CopyError> {
    let url = payload.validate().map_err(CopyError::InvalidRequest)?;

    let page = state.fetcher.fetch(&url).await?;
    info!(
        status = %page.status,
        final_url = %page.url_final,
        charset = ?page.charset,
        bytes = page.body_raw.len(),
        fetched_at = %page.fetched_at,
        "page fetched"
    );

    // Parsing and the readability fallback are CPU bound; keep them off the
    // async workers.
    let extractor = state.extractor.clone();
    let html = page.body_utf8;
    let raw_description =
        tokio::task::spawn_blocking(move || extractor.extract(&html, &url)).await??;

    let copy = copywriter::render(
        &raw_description,
        &CopyOptions {
            tone: &payload.tone,
            platform: &payload.platform,
            brand: payload.brand.as_deref(),
            price: payload.price.as_deref(),
        },
    );

    Ok(ExtractResponse {
        success: true,
        raw_description,
        sales_copy_md: copy.to_markdown(),
    })
}
