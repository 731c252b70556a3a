use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::review;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::repository::reviews::{self, NewReview};
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub message: String,
    pub data: review::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub message: String,
    pub data: Vec<review::Model>,
}

/// List reviews
#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Reviews",
    responses((status = 200, description = "The list of reviews", body = ReviewListResponse))
)]
pub async fn find_all_reviews(
    State(state): State<AppState>,
) -> AppResult<Json<ReviewListResponse>> {
    let reviews = reviews::find_all(&state.db).await?;
    Ok(Json(ReviewListResponse {
        message: format!("There are {} reviews", reviews.len()),
        data: reviews,
    }))
}

/// Review a trip as the caller
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    request_body = NewReview,
    responses(
        (status = 201, description = "The created review", body = ReviewResponse),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "The trip was not found")
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<NewReview>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let review = reviews::create(&state.db, claims.sub, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review created".to_string(),
            data: review,
        }),
    ))
}
