use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::{role, user};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::repository::users::{self, Credentials};
use crate::utils::jwt::issue_token;
use crate::utils::password::verify_password;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub message: String,
    pub data: user::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub message: String,
    pub data: Vec<user::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginData {
    pub token: String,
    pub user: user::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub data: LoginData,
}

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses((status = 200, description = "The list of users", body = UserListResponse))
)]
pub async fn find_all_users(State(state): State<AppState>) -> AppResult<Json<UserListResponse>> {
    let users = users::find_all(&state.db).await?;
    Ok(Json(UserListResponse {
        message: format!("There are {} users", users.len()),
        data: users,
    }))
}

/// Register a new account with the default role
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = "Users",
    request_body = Credentials,
    responses(
        (status = 201, description = "The created user", body = UserResponse),
        (status = 400, description = "Invalid username or password"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Credentials>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = users::create(&state.db, &payload, role::USER).await?;
    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "User created".to_string(),
            data: user,
        }),
    ))
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Users",
    request_body = Credentials,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Credentials>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = users::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = issue_token(
        &user,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        data: LoginData { token, user },
    }))
}
