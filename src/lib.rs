pub mod config;
pub mod db;
pub mod docs;
pub mod entities;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod utils;

use sea_orm::DatabaseConnection;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}
