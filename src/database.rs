use color_eyre::{Result, eyre::Context};
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};
use std::time::Duration;

/// Connection to the hosted relational backend holding artists, albums and awards.
pub struct Database {
    pub conn: DatabaseConnection,
}

impl Database {
    /// Connect to the backend at the given URL (`postgres://...`).
    pub async fn connect(url: &str) -> Result<Self> {
        tracing::debug!("Connecting to database");

        let mut opt = ConnectOptions::new(url.to_owned());
        opt.max_connections(16)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .sqlx_logging(false);

        let conn = SeaDatabase::connect(opt)
            .await
            .wrap_err("Failed to connect to database")?;

        tracing::info!("Database connection ready");
        Ok(Database { conn })
    }
}
