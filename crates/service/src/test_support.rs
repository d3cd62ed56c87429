#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

use models::db::{connect_with_config, migrate};

/// Fresh in-memory SQLite database with migrations applied; every test gets
/// its own schema, so ids restart at 1.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
