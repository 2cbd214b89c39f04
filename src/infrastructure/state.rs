//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;

use crate::application::services::{CategoryMap, DetailService, ListService};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{
    SqliteConsumableRepository, SqliteCreatureRepository, SqliteFactionRepository,
    SqliteLocationRepository, SqliteRegionRepository,
};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub list_service: ListService,
    pub detail_service: DetailService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .connect(&config.database_url)
            .await
            .context("Failed to open record store")?;

        let regions = Arc::new(SqliteRegionRepository::new(pool.clone()).await?);
        let factions = Arc::new(SqliteFactionRepository::new(pool.clone()).await?);
        let locations = Arc::new(SqliteLocationRepository::new(pool.clone()).await?);
        let creatures = Arc::new(SqliteCreatureRepository::new(pool.clone()).await?);
        let consumables = Arc::new(SqliteConsumableRepository::new(pool).await?);

        let list_service = ListService::new(
            regions.clone(),
            factions.clone(),
            locations.clone(),
            creatures.clone(),
            consumables.clone(),
        );
        let detail_service = DetailService::new(
            regions,
            factions,
            locations,
            creatures,
            consumables,
            CategoryMap::standard(),
        );

        Ok(Self {
            config,
            list_service,
            detail_service,
        })
    }
}
