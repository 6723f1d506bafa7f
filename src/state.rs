use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;
use crate::metrics::FileserverHits;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub fileserver_hits: Arc<FileserverHits>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            config,
            fileserver_hits: Arc::new(FileserverHits::default()),
        }
    }
}
