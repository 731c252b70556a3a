use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::docs::ApiDoc;

pub async fn homepage() -> Json<Value> {
    Json(json!({ "message": "Homepage" }))
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Unmatched paths. A trailing slash (`/api/trips/`) gets a 308 to the
/// slash-less path; anything else is a JSON 404.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    if path.len() > 1 && path.ends_with('/') {
        let mut target = path.trim_end_matches('/').to_string();
        if target.is_empty() {
            target.push('/');
        }
        if let Some(query) = uri.query() {
            target.push('?');
            target.push_str(query);
        }
        return Redirect::permanent(&target).into_response();
    }

    (StatusCode::NOT_FOUND, Json(json!({ "message": "Page not found" }))).into_response()
}
