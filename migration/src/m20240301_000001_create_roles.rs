use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(integer(Role::Id).not_null().primary_key())
                    .col(string_len(Role::Label, 50).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // Seed roles; new users default to id 3
        let insert = Query::insert()
            .into_table(Role::Table)
            .columns([Role::Id, Role::Label])
            .values_panic([1.into(), "superadmin".into()])
            .values_panic([2.into(), "admin".into()])
            .values_panic([3.into(), "user".into()])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Role {
    #[sea_orm(iden = "roles")]
    Table,
    Id,
    Label,
}
