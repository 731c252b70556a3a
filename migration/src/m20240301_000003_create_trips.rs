use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000002_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(string_len(Trip::Name, 50).not_null().unique_key())
                    .col(integer_null(Trip::Duration))
                    .col(string_null(Trip::Destination))
                    .col(string_null(Trip::Description))
                    .col(string_null(Trip::ImageUrl))
                    .col(integer(Trip::UserId).not_null())
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Trip::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_user")
                            .from(Trip::Table, Trip::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    #[sea_orm(iden = "trips")]
    Table,
    Id,
    Name,
    Duration,
    Destination,
    Description,
    ImageUrl,
    UserId,
    CreatedAt,
    UpdatedAt,
}
