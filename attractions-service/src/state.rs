//! Application state management

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::{config::Config, database, error::Result, query::AttractionQueries};

/// Application state shared across handlers
///
/// Built once at startup and handed to [`crate::router::router`]; handlers
/// receive a clone through axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
    attractions: AttractionQueries,
}

impl AppState {
    /// Create state from an existing pool
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            config: Arc::new(config),
            attractions: AttractionQueries::new(pool),
        }
    }

    /// Create the pool described by `config.database` and wrap it
    pub async fn connect(config: Config) -> Result<Self> {
        let pool = database::create_pool(&config.database).await?;
        Ok(Self::new(config, pool))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the query executor
    pub fn attractions(&self) -> &AttractionQueries {
        &self.attractions
    }

    /// Get the datastore pool
    pub fn db(&self) -> &SqlitePool {
        self.attractions.pool()
    }
}
