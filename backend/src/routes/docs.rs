use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Extension, Json};

use crate::types::Environment;

/// Title shown in the generated OpenAPI document and the docs page
pub const API_TITLE: &str = "Shopping Cart API";

/// Routes for the Scalar docs page and the OpenAPI document it renders
pub fn handler() -> ApiRouter {
    let scalar = Scalar::new("/openapi.json").with_title(API_TITLE);

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route("/openapi.json", get(openapi_schema))
}

/// Serves the OpenAPI document, outside production only
#[allow(clippy::unused_async)]
async fn openapi_schema(
    Extension(environment): Extension<Environment>,
    Extension(openapi): Extension<Arc<OpenApi>>,
) -> Response {
    if !environment.show_api_docs() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(openapi.as_ref()).into_response()
}
