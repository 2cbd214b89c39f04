//! Creature repository implementation for SQLite

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::CreatureRepositoryPort;
use crate::domain::entities::{Creature, CreatureType, ThreatLevel};

/// Repository for Creature reads
pub struct SqliteCreatureRepository {
    pool: SqlitePool,
}

impl SqliteCreatureRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS creatures (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                creature_type TEXT NOT NULL DEFAULT 'ANIMAL',
                threat_level TEXT NOT NULL DEFAULT 'LOW',
                habitat TEXT NOT NULL DEFAULT '',
                weakness TEXT NOT NULL DEFAULT '',
                resistances TEXT NOT NULL DEFAULT '',
                behavior TEXT NOT NULL DEFAULT '',
                loot_drops TEXT NOT NULL DEFAULT '',
                variants TEXT NOT NULL DEFAULT '',
                screenshot_url TEXT NOT NULL DEFAULT '',
                wiki_url TEXT NOT NULL DEFAULT '',
                lore_entry TEXT NOT NULL DEFAULT '',
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
impl CreatureRepositoryPort for SqliteCreatureRepository {
    async fn get(&self, id: i64) -> Result<Option<Creature>> {
        let row = sqlx::query("SELECT * FROM creatures WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_creature).transpose()
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM creatures")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Creature>> {
        let rows = sqlx::query("SELECT * FROM creatures ORDER BY name ASC LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_creature).collect()
    }
}

fn row_to_creature(row: &SqliteRow) -> Result<Creature> {
    let type_code: String = row.try_get("creature_type")?;
    let threat_code: String = row.try_get("threat_level")?;
    Ok(Creature {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        creature_type: CreatureType::from_code(&type_code),
        threat_level: ThreatLevel::from_code(&threat_code),
        habitat: row.try_get("habitat")?,
        weakness: row.try_get("weakness")?,
        resistances: row.try_get("resistances")?,
        behavior: row.try_get("behavior")?,
        loot_drops: row.try_get("loot_drops")?,
        variants: row.try_get("variants")?,
        screenshot_url: row.try_get("screenshot_url")?,
        wiki_url: row.try_get("wiki_url")?,
        lore_entry: row.try_get("lore_entry")?,
        explanation: row.try_get("explanation")?,
    })
}
