use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}

/// Drain and close the pool. Called once the server has stopped accepting requests.
pub async fn close(db: DatabaseConnection) -> AppResult<()> {
    db.close()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to close database: {}", e)))
}
