use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JsonValue, QueryFilter, QueryOrder, Set, SqlErr, Statement,
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::entities::trip;
use crate::error::{AppError, AppResult};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;

const TRIPS_WITH_RATINGS_SQL: &str =
    "SELECT trips.name, reviews.rating FROM trips LEFT JOIN reviews ON trips.id = reviews.trip_id";

/// Fields a client may supply when creating a trip. The owner is never one of them.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub name: String,
    pub duration: Option<i32>,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Fields a client may change on an existing trip. The outer `Option` is
/// whether the key was sent at all; `Some(None)` is an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripChanges {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub destination: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

/// Only runs for keys that are in the body, so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn validate_name(name: &str) -> AppResult<()> {
    let len = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(AppError::Validation(format!(
            "Name must be between {} and {} characters.",
            NAME_MIN_CHARS, NAME_MAX_CHARS
        )));
    }
    Ok(())
}

fn name_taken(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Validation("Trip name already taken".to_string())
        }
        _ => err.into(),
    }
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<trip::Model>> {
    Ok(trip::Entity::find()
        .order_by_asc(trip::Column::Id)
        .all(db)
        .await?)
}

/// Trip names joined with their review ratings, bypassing the entity mapping.
pub async fn find_all_raw(db: &DatabaseConnection) -> AppResult<Vec<JsonValue>> {
    let statement = Statement::from_string(db.get_database_backend(), TRIPS_WITH_RATINGS_SQL);
    Ok(JsonValue::find_by_statement(statement).all(db).await?)
}

pub async fn search_by_name(db: &DatabaseConnection, term: &str) -> AppResult<Vec<trip::Model>> {
    Ok(trip::Entity::find()
        .filter(trip::Column::Name.contains(term))
        .order_by_asc(trip::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<trip::Model>> {
    Ok(trip::Entity::find_by_id(id).one(db).await?)
}

pub async fn create(db: &DatabaseConnection, owner_id: i32, input: NewTrip) -> AppResult<trip::Model> {
    validate_name(&input.name)?;

    let now = Utc::now();
    let new_trip = trip::ActiveModel {
        name: Set(input.name),
        duration: Set(input.duration),
        destination: Set(input.destination),
        description: Set(input.description),
        image_url: Set(input.image_url),
        user_id: Set(owner_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_trip
        .insert(db)
        .await
        .map_err(name_taken)
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: TripChanges,
) -> AppResult<Option<trip::Model>> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: trip::ActiveModel = existing.into();

    match changes.name {
        Some(Some(name)) => {
            validate_name(&name)?;
            active.name = Set(name);
        }
        Some(None) => return Err(AppError::Validation("Name cannot be null".to_string())),
        None => {}
    }
    if let Some(duration) = changes.duration {
        active.duration = Set(duration);
    }
    if let Some(destination) = changes.destination {
        active.destination = Set(destination);
    }
    if let Some(description) = changes.description {
        active.description = Set(description);
    }
    if let Some(image_url) = changes.image_url {
        active.image_url = Set(image_url);
    }
    active.updated_at = Set(Utc::now());

    let updated = active.update(db).await.map_err(name_taken)?;
    Ok(Some(updated))
}

/// Hard delete. Returns the row as it was just before removal.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<Option<trip::Model>> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    trip::Entity::delete_by_id(existing.id).exec(db).await?;
    Ok(Some(existing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_within_bounds() {
        assert!(validate_name("Rome").is_ok());
        assert!(validate_name("abc").is_ok());
        assert!(validate_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn rejects_short_and_long_names() {
        assert!(matches!(validate_name("ab"), Err(AppError::Validation(_))));
        assert!(matches!(validate_name(""), Err(AppError::Validation(_))));
        assert!(matches!(
            validate_name(&"a".repeat(51)),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!(validate_name("été").is_ok());
    }

    #[test]
    fn client_owner_field_is_not_accepted() {
        let input: NewTrip =
            serde_json::from_str(r#"{"name":"Oasis Trip","duration":7,"UserId":99}"#).unwrap();
        assert_eq!(input.name, "Oasis Trip");
        assert_eq!(input.duration, Some(7));
    }

    #[test]
    fn changes_tell_null_from_absent() {
        let changes: TripChanges =
            serde_json::from_str(r#"{"description":null,"duration":3}"#).unwrap();
        assert_eq!(changes.description, Some(None));
        assert_eq!(changes.duration, Some(Some(3)));
        assert_eq!(changes.destination, None);
        assert_eq!(changes.name, None);
    }
}
