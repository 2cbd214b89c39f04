//! Location repository implementation for SQLite
//!
//! Region and controlling-faction references are resolved to display names
//! at read time via LEFT JOINs, so a cleared reference simply comes back
//! NULL and the location still renders.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::LocationRepositoryPort;
use crate::domain::entities::{Location, LocationType};

const SELECT_LOCATION: &str = r#"
    SELECT l.*, r.name AS region_name, f.name AS controlling_faction_name
    FROM locations l
    LEFT JOIN regions r ON r.id = l.region_id
    LEFT JOIN factions f ON f.id = l.controlling_faction_id
"#;

/// Repository for Location reads
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS locations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL UNIQUE,
                name_cn TEXT NOT NULL DEFAULT '',
                notes TEXT NOT NULL DEFAULT '',
                region_id INTEGER REFERENCES regions(id) ON DELETE SET NULL,
                controlling_faction_id INTEGER REFERENCES factions(id) ON DELETE SET NULL,
                parent_location_group TEXT NOT NULL DEFAULT '',
                location_type TEXT NOT NULL DEFAULT 'LMK',
                description TEXT NOT NULL DEFAULT '',
                is_settlement INTEGER NOT NULL DEFAULT 0,
                has_workbench INTEGER NOT NULL DEFAULT 0,
                is_cleared INTEGER NOT NULL DEFAULT 0,
                difficulty INTEGER NOT NULL DEFAULT 1,
                notable_loot TEXT NOT NULL DEFAULT '',
                screenshot_url TEXT NOT NULL DEFAULT '',
                interior_cell_count INTEGER NOT NULL DEFAULT 1,
                respawn_rate TEXT NOT NULL DEFAULT '',
                primary_enemies TEXT NOT NULL DEFAULT '',
                quest_starter INTEGER NOT NULL DEFAULT 0,
                related_quests TEXT NOT NULL DEFAULT '',
                has_power_armor_station INTEGER NOT NULL DEFAULT 0,
                has_cooking_station INTEGER NOT NULL DEFAULT 0,
                has_chemistry_station INTEGER NOT NULL DEFAULT 0,
                is_underwater INTEGER NOT NULL DEFAULT 0,
                access_requires TEXT NOT NULL DEFAULT '',
                explanation TEXT NOT NULL DEFAULT '',
                location_wiki_url TEXT NOT NULL DEFAULT '',
                atmosphere_lore TEXT NOT NULL DEFAULT '',
                visuals_desc TEXT NOT NULL DEFAULT ''
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl LocationRepositoryPort for SqliteLocationRepository {
    async fn get(&self, id: i64) -> Result<Option<Location>> {
        let query = format!("{SELECT_LOCATION} WHERE l.id = ?");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let location = row_to_location(&row)?;
                tracing::debug!("Loaded location: {}", location.code);
                Ok(Some(location))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Location>> {
        // Display-name ordering: localized name when set, else the cell code
        let query = format!(
            "{SELECT_LOCATION} ORDER BY COALESCE(NULLIF(l.name_cn, ''), l.code) ASC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_location).collect()
    }
}

fn row_to_location(row: &SqliteRow) -> Result<Location> {
    let type_code: String = row.try_get("location_type")?;
    Ok(Location {
        id: row.try_get("id")?,
        code: row.try_get("code")?,
        name_cn: row.try_get("name_cn")?,
        notes: row.try_get("notes")?,
        region_id: row.try_get("region_id")?,
        region_name: row.try_get("region_name")?,
        controlling_faction_id: row.try_get("controlling_faction_id")?,
        controlling_faction_name: row.try_get("controlling_faction_name")?,
        parent_location_group: row.try_get("parent_location_group")?,
        location_type: LocationType::from_code(&type_code),
        description: row.try_get("description")?,
        is_settlement: row.try_get("is_settlement")?,
        has_workbench: row.try_get("has_workbench")?,
        is_cleared: row.try_get("is_cleared")?,
        difficulty: row.try_get("difficulty")?,
        notable_loot: row.try_get("notable_loot")?,
        screenshot_url: row.try_get("screenshot_url")?,
        interior_cell_count: row.try_get("interior_cell_count")?,
        respawn_rate: row.try_get("respawn_rate")?,
        primary_enemies: row.try_get("primary_enemies")?,
        quest_starter: row.try_get("quest_starter")?,
        related_quests: row.try_get("related_quests")?,
        has_power_armor_station: row.try_get("has_power_armor_station")?,
        has_cooking_station: row.try_get("has_cooking_station")?,
        has_chemistry_station: row.try_get("has_chemistry_station")?,
        is_underwater: row.try_get("is_underwater")?,
        access_requires: row.try_get("access_requires")?,
        explanation: row.try_get("explanation")?,
        location_wiki_url: row.try_get("location_wiki_url")?,
        atmosphere_lore: row.try_get("atmosphere_lore")?,
        visuals_desc: row.try_get("visuals_desc")?,
    })
}
