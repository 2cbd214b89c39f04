//! Faction repository implementation for SQLite

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::FactionRepositoryPort;
use crate::domain::entities::{Faction, Hostility, TechLevel};

/// Repository for Faction reads
pub struct SqliteFactionRepository {
    pool: SqlitePool,
}

impl SqliteFactionRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS factions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                ideology TEXT NOT NULL DEFAULT '',
                leader TEXT NOT NULL DEFAULT '',
                logo_url TEXT NOT NULL DEFAULT '',
                is_joinable INTEGER NOT NULL DEFAULT 0,
                tech_level TEXT NOT NULL DEFAULT 'SCAVENGED',
                hostility_status TEXT NOT NULL DEFAULT 'NEUTRAL',
                wiki_url TEXT NOT NULL DEFAULT '',
                founding_year INTEGER,
                recruitment_policy TEXT NOT NULL DEFAULT '',
                base_of_operations TEXT NOT NULL DEFAULT '',
                allies TEXT NOT NULL DEFAULT '',
                enemies TEXT NOT NULL DEFAULT '',
                equipment_standard TEXT NOT NULL DEFAULT '',
                faction_size TEXT NOT NULL DEFAULT '',
                notable_members TEXT NOT NULL DEFAULT '',
                player_rep_impact TEXT NOT NULL DEFAULT '',
                quote TEXT NOT NULL DEFAULT '',
                explanation TEXT NOT NULL DEFAULT '',
                image_url_2 TEXT NOT NULL DEFAULT '',
                image_url_3 TEXT NOT NULL DEFAULT '',
                image_url_4 TEXT NOT NULL DEFAULT ''
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl FactionRepositoryPort for SqliteFactionRepository {
    async fn get(&self, id: i64) -> Result<Option<Faction>> {
        let row = sqlx::query("SELECT * FROM factions WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let faction = row_to_faction(&row)?;
                tracing::debug!("Loaded faction: {}", faction.name);
                Ok(Some(faction))
            }
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM factions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Faction>> {
        let rows = sqlx::query("SELECT * FROM factions ORDER BY name ASC LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_faction).collect()
    }
}

fn row_to_faction(row: &SqliteRow) -> Result<Faction> {
    let tech_code: String = row.try_get("tech_level")?;
    let hostility_code: String = row.try_get("hostility_status")?;
    Ok(Faction {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        ideology: row.try_get("ideology")?,
        leader: row.try_get("leader")?,
        logo_url: row.try_get("logo_url")?,
        is_joinable: row.try_get("is_joinable")?,
        tech_level: TechLevel::from_code(&tech_code),
        hostility_status: Hostility::from_code(&hostility_code),
        wiki_url: row.try_get("wiki_url")?,
        founding_year: row.try_get("founding_year")?,
        recruitment_policy: row.try_get("recruitment_policy")?,
        base_of_operations: row.try_get("base_of_operations")?,
        allies: row.try_get("allies")?,
        enemies: row.try_get("enemies")?,
        equipment_standard: row.try_get("equipment_standard")?,
        faction_size: row.try_get("faction_size")?,
        notable_members: row.try_get("notable_members")?,
        player_rep_impact: row.try_get("player_rep_impact")?,
        quote: row.try_get("quote")?,
        explanation: row.try_get("explanation")?,
        image_url_2: row.try_get("image_url_2")?,
        image_url_3: row.try_get("image_url_3")?,
        image_url_4: row.try_get("image_url_4")?,
    })
}
