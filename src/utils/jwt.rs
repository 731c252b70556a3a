use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::entities::{trip, user};
use crate::error::{AppError, AppResult};

/// Identity of the caller, carried in the bearer token and handed to
/// handlers as a request extension by `auth_middleware`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i32,
    pub username: String,
    pub role_id: i32,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn for_user(user: &user::Model, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id,
            username: user.username.clone(),
            role_id: user.role_id,
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn owns(&self, trip: &trip::Model) -> bool {
        trip.user_id == self.sub
    }
}

/// Sign a token for `user` valid for `lifetime_hours`.
pub fn issue_token(user: &user::Model, secret: &str, lifetime_hours: i64) -> AppResult<String> {
    let claims = Claims::for_user(user, Duration::hours(lifetime_hours));

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            AppError::Unauthorized("Invalid or expired token".to_string())
        })
}
