use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::{review, trip};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewReview {
    pub content: Option<String>,
    pub rating: i32,
    #[serde(rename = "TripId")]
    pub trip_id: i32,
}

impl NewReview {
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::Validation(
                "Rating must be between 1 and 5.".to_string(),
            ));
        }
        Ok(())
    }
}

pub async fn find_all(db: &DatabaseConnection) -> AppResult<Vec<review::Model>> {
    Ok(review::Entity::find()
        .order_by_asc(review::Column::Id)
        .all(db)
        .await?)
}

pub async fn create(
    db: &DatabaseConnection,
    author_id: i32,
    input: NewReview,
) -> AppResult<review::Model> {
    input.validate()?;

    trip::Entity::find_by_id(input.trip_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Trip does not exist".to_string()))?;

    let now = Utc::now();
    let new_review = review::ActiveModel {
        content: Set(input.content),
        rating: Set(input.rating),
        trip_id: Set(input.trip_id),
        user_id: Set(author_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    Ok(new_review.insert(db).await?)
}
