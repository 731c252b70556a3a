use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::trip;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::repository::trips::{self, NewTrip, TripChanges};
use crate::utils::jwt::Claims;
use crate::utils::upload::{public_image_url, remove_image, store_image};
use crate::AppState;

const TRIP_NOT_FOUND: &str = "Trip does not exist";

#[derive(Debug, Serialize, ToSchema)]
pub struct TripListResponse {
    pub message: String,
    pub data: Vec<trip::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TripResponse {
    pub message: String,
    pub data: trip::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RawRowsResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for in trip names
    pub name: Option<String>,
}

fn list_message(trips: Vec<trip::Model>) -> TripListResponse {
    TripListResponse {
        message: format!("There are {} trips", trips.len()),
        data: trips,
    }
}

/// List every trip
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = "Trips",
    responses(
        (status = 200, description = "The list of trips", body = TripListResponse),
        (status = 500, description = "Some server error")
    )
)]
pub async fn find_all_trips(State(state): State<AppState>) -> AppResult<Json<TripListResponse>> {
    let trips = trips::find_all(&state.db).await?;
    Ok(Json(list_message(trips)))
}

/// Trip names with review ratings straight from SQL
#[utoipa::path(
    get,
    path = "/api/trips/rawSQL",
    tag = "Trips",
    responses(
        (status = 200, description = "Raw rows of the trips/reviews join", body = RawRowsResponse),
        (status = 500, description = "Some server error")
    )
)]
pub async fn find_all_trips_raw_sql(
    State(state): State<AppState>,
) -> AppResult<Json<RawRowsResponse>> {
    let rows = trips::find_all_raw(&state.db).await?;
    Ok(Json(RawRowsResponse { data: rows }))
}

/// Search trips by name
#[utoipa::path(
    get,
    path = "/api/trips/search",
    tag = "Trips",
    params(SearchQuery),
    responses(
        (status = 200, description = "Trips whose name contains the query", body = TripListResponse),
        (status = 500, description = "Some server error")
    )
)]
pub async fn search_trips(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> AppResult<Json<TripListResponse>> {
    let term = query.name.unwrap_or_default();
    let trips = trips::search_by_name(&state.db, &term).await?;
    Ok(Json(list_message(trips)))
}

/// Get the trip by id
#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = i32, Path, description = "The trip id")),
    responses(
        (status = 200, description = "The trip", body = TripResponse),
        (status = 404, description = "The trip was not found")
    )
)]
pub async fn find_trip_by_pk(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<TripResponse>> {
    let trip = trips::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(TRIP_NOT_FOUND.to_string()))?;

    Ok(Json(TripResponse {
        message: "Trip found".to_string(),
        data: trip,
    }))
}

/// Create a new trip owned by the caller
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = "Trips",
    request_body = NewTrip,
    responses(
        (status = 201, description = "The created trip", body = TripResponse),
        (status = 400, description = "Invalid or duplicate name"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_trip(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<NewTrip>,
) -> AppResult<(StatusCode, Json<TripResponse>)> {
    let trip = trips::create(&state.db, claims.sub, payload).await?;
    tracing::info!(trip_id = trip.id, user_id = claims.sub, "Trip created");

    Ok((
        StatusCode::CREATED,
        Json(TripResponse {
            message: "Trip created".to_string(),
            data: trip,
        }),
    ))
}

/// Create a trip from a multipart form carrying an `image` file
#[utoipa::path(
    post,
    path = "/api/trips/withImg",
    tag = "Trips",
    responses(
        (status = 201, description = "The created trip", body = TripResponse),
        (status = 400, description = "Missing image or invalid fields"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_trip_with_img(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<TripResponse>)> {
    let mut input = NewTrip::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                image = Some((content_type, bytes));
            }
            "name" => input.name = field.text().await?,
            "destination" => input.destination = Some(field.text().await?),
            "description" => input.description = Some(field.text().await?),
            "duration" => {
                let raw = field.text().await?;
                let duration = raw.trim().parse().map_err(|_| {
                    AppError::Validation("Duration must be an integer".to_string())
                })?;
                input.duration = Some(duration);
            }
            // Anything else, including an owner id, is ignored.
            _ => {}
        }
    }

    let (content_type, bytes) = image
        .ok_or_else(|| AppError::Validation("An image file is required".to_string()))?;

    trips::validate_name(&input.name)?;

    let filename = store_image(&state.config.upload_dir, &content_type, &bytes).await?;
    input.image_url = Some(public_image_url(&headers, &filename));

    let trip = match trips::create(&state.db, claims.sub, input).await {
        Ok(trip) => trip,
        Err(e) => {
            remove_image(&state.config.upload_dir, &filename).await;
            return Err(e);
        }
    };
    tracing::info!(trip_id = trip.id, user_id = claims.sub, %filename, "Trip created with image");

    Ok((
        StatusCode::CREATED,
        Json(TripResponse {
            message: "Trip created".to_string(),
            data: trip,
        }),
    ))
}

/// Update the trip by id (owner only)
#[utoipa::path(
    put,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = i32, Path, description = "The trip id")),
    request_body = TripChanges,
    responses(
        (status = 201, description = "The trip was updated", body = TripResponse),
        (status = 403, description = "Caller does not own the trip"),
        (status = 404, description = "The trip was not found")
    )
)]
pub async fn update_trip(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<TripChanges>,
) -> AppResult<(StatusCode, Json<TripResponse>)> {
    let trip = trips::update(&state.db, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound(TRIP_NOT_FOUND.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(TripResponse {
            message: "Trip updated".to_string(),
            data: trip,
        }),
    ))
}

/// Remove the trip by id (owner only); its reviews go with it
#[utoipa::path(
    delete,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = i32, Path, description = "The trip id")),
    responses(
        (status = 200, description = "The trip was deleted", body = TripResponse),
        (status = 403, description = "Caller does not own the trip"),
        (status = 404, description = "The trip was not found")
    )
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<TripResponse>> {
    let trip = trips::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(TRIP_NOT_FOUND.to_string()))?;
    tracing::info!(trip_id = trip.id, "Trip deleted");

    Ok(Json(TripResponse {
        message: "Trip deleted".to_string(),
        data: trip,
    }))
}
