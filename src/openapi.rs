use axum::Json;
use utoipa::OpenApi;

use crate::{
    health::HealthResponse,
    sales_copy::dtos::{ErrorResponse, ExtractRequest, ExtractResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "楽天市場→売れる説明文API", version = "1.0.0"),
    servers((url = "https://sell-copy-api.onrender.com")),
    paths(
        crate::sales_copy::handlers::extract_and_copy,
        crate::health::health_check,
    ),
    components(schemas(ExtractRequest, ExtractResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "copy", description = "Product description extraction and sales copy"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
