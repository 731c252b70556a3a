use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::repository::trips;
use crate::utils::jwt::{verify_token, Claims};
use crate::AppState;

/// Extract and validate JWT token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let auth = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

    let claims = verify_token(auth.token(), &state.config.jwt_secret)?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Only let the owner of the trip named in the path through.
/// Must run after `auth_middleware`.
pub async fn restrict_to_own_trip(
    State(state): State<AppState>,
    AppPath(trip_id): AppPath<i32>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::Unauthorized("No authentication found".to_string()))?;

    let trip = trips::find_by_id(&state.db, trip_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Trip does not exist".to_string()))?;

    if !claims.owns(&trip) {
        tracing::warn!(trip_id, user_id = claims.sub, "Rejected change to a trip owned by someone else");
        return Err(AppError::Forbidden(
            "You are not the owner of this trip".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
