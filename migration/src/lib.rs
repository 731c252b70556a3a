pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_roles;
mod m20240301_000002_create_users;
mod m20240301_000003_create_trips;
mod m20240301_000004_create_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_roles::Migration),
            Box::new(m20240301_000002_create_users::Migration),
            Box::new(m20240301_000003_create_trips::Migration),
            Box::new(m20240301_000004_create_reviews::Migration),
        ]
    }
}
