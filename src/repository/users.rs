use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::{role, user};
use crate::error::{AppError, AppResult};
use crate::utils::password::hash_password;

pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> AppResult<()> {
        let len = self.username.chars().count();
        if !(3..=50).contains(&len) {
            return Err(AppError::Validation(
                "Username must be between 3 and 50 characters.".to_string(),
            ));
        }
        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters.",
                PASSWORD_MIN_CHARS
            )));
        }
        Ok(())
    }
}

fn username_taken() -> AppError {
    AppError::Conflict("Username already taken".to_string())
}

fn insert_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => username_taken(),
        _ => err.into(),
    }
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<user::Model>> {
    Ok(user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?)
}

/// Register an account with the given role, hashing the password.
pub async fn create(
    db: &DatabaseConnection,
    credentials: &Credentials,
    role_id: i32,
) -> AppResult<user::Model> {
    credentials.validate()?;

    if find_by_username(db, &credentials.username).await?.is_some() {
        return Err(username_taken());
    }

    let now = Utc::now();
    let new_user = user::ActiveModel {
        username: Set(credentials.username.clone()),
        password_hash: Set(hash_password(&credentials.password)?),
        role_id: Set(role_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    // A concurrent signup can still win the race to the unique index.
    new_user.insert(db).await.map_err(insert_conflict)
}

/// Create the configured superadmin on first start.
pub async fn seed_admin(db: &DatabaseConnection, username: &str, password: &str) -> AppResult<()> {
    if find_by_username(db, username).await?.is_some() {
        return Ok(());
    }

    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    create(db, &credentials, role::SUPERADMIN).await?;
    tracing::info!("Admin account created: {}", username);
    Ok(())
}
