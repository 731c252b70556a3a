use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{home, reviews, trips, users};
use crate::middleware::auth::{auth_middleware, restrict_to_own_trip};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let trip_routes = Router::new()
        .route("/", get(trips::find_all_trips))
        .route(
            "/",
            post(trips::create_trip)
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .route("/rawSQL", get(trips::find_all_trips_raw_sql))
        .route(
            "/withImg",
            post(trips::create_trip_with_img)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .route("/search", get(trips::search_trips))
        .route("/{id}", get(trips::find_trip_by_pk))
        // Owner only; auth runs first so claims are present for the ownership check
        .route(
            "/{id}",
            put(trips::update_trip)
                .delete(trips::delete_trip)
                .route_layer(middleware::from_fn_with_state(state.clone(), restrict_to_own_trip))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        );

    let user_routes = Router::new()
        .route("/", get(users::find_all_users))
        .route("/signup", post(users::signup))
        .route("/login", post(users::login));

    let review_routes = Router::new()
        .route("/", get(reviews::find_all_reviews))
        .route(
            "/",
            post(reviews::create_review)
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        );

    Router::new()
        .route("/", get(home::homepage))
        .route("/api-docs/openapi.json", get(home::openapi))
        .nest("/api/trips", trip_routes)
        .nest("/api/users", user_routes)
        .nest("/api/reviews", review_routes)
        .nest_service("/images", ServeDir::new(&state.config.upload_dir))
        .fallback(home::not_found)
        .with_state(state)
}
