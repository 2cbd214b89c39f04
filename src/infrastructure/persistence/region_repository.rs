//! Region repository implementation for SQLite

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::RegionRepositoryPort;
use crate::domain::entities::{RadiationLevel, Region};

/// Repository for Region reads
pub struct SqliteRegionRepository {
    pool: SqlitePool,
}

impl SqliteRegionRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS regions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL DEFAULT '',
                map_image_url TEXT NOT NULL DEFAULT '',
                radiation_level TEXT NOT NULL DEFAULT 'LOW',
                weather_pattern TEXT NOT NULL DEFAULT '',
                discovered_date TEXT NOT NULL DEFAULT '',
                primary_threat TEXT NOT NULL DEFAULT '',
                economic_activity TEXT NOT NULL DEFAULT '',
                pre_war_purpose TEXT NOT NULL DEFAULT '',
                number_of_settlements INTEGER NOT NULL DEFAULT 0,
                major_landmarks TEXT NOT NULL DEFAULT '',
                water_source TEXT NOT NULL DEFAULT '',
                connectivity TEXT NOT NULL DEFAULT '',
                lore_entry TEXT NOT NULL DEFAULT '',
                map_coordinates TEXT NOT NULL DEFAULT '',
                explanation TEXT NOT NULL DEFAULT ''
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RegionRepositoryPort for SqliteRegionRepository {
    async fn get(&self, id: i64) -> Result<Option<Region>> {
        let row = sqlx::query("SELECT * FROM regions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let region = row_to_region(&row)?;
                tracing::debug!("Loaded region: {}", region.name);
                Ok(Some(region))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM regions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Region>> {
        let rows = sqlx::query("SELECT * FROM regions ORDER BY name ASC LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_region).collect()
    }
}

fn row_to_region(row: &SqliteRow) -> Result<Region> {
    let radiation_code: String = row.try_get("radiation_level")?;
    Ok(Region {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        map_image_url: row.try_get("map_image_url")?,
        radiation_level: RadiationLevel::from_code(&radiation_code),
        weather_pattern: row.try_get("weather_pattern")?,
        discovered_date: row.try_get("discovered_date")?,
        primary_threat: row.try_get("primary_threat")?,
        economic_activity: row.try_get("economic_activity")?,
        pre_war_purpose: row.try_get("pre_war_purpose")?,
        number_of_settlements: row.try_get("number_of_settlements")?,
        major_landmarks: row.try_get("major_landmarks")?,
        water_source: row.try_get("water_source")?,
        connectivity: row.try_get("connectivity")?,
        lore_entry: row.try_get("lore_entry")?,
        map_coordinates: row.try_get("map_coordinates")?,
        explanation: row.try_get("explanation")?,
    })
}
