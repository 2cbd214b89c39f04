//! Consumable repository implementation for SQLite

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::application::ports::outbound::ConsumableRepositoryPort;
use crate::domain::entities::{AddictionRisk, Consumable, ConsumableType};

/// Repository for Consumable reads
pub struct SqliteConsumableRepository {
    pool: SqlitePool,
}

impl SqliteConsumableRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS consumables (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                consumable_type TEXT NOT NULL DEFAULT 'FOOD',
                effects TEXT NOT NULL DEFAULT '',
                addiction_risk TEXT NOT NULL DEFAULT 'NONE',
                rads INTEGER NOT NULL DEFAULT 0,
                base_value INTEGER NOT NULL DEFAULT 0,
                weight REAL NOT NULL DEFAULT 0,
                crafting_station TEXT NOT NULL DEFAULT '',
                key_ingredients TEXT NOT NULL DEFAULT '',
                image_url TEXT NOT NULL DEFAULT '',
                wiki_url TEXT NOT NULL DEFAULT '',
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
impl ConsumableRepositoryPort for SqliteConsumableRepository {
    async fn get(&self, id: i64) -> Result<Option<Consumable>> {
        let row = sqlx::query("SELECT * FROM consumables WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_consumable).transpose()
    }

    async fn count(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM consumables")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Consumable>> {
        let rows = sqlx::query("SELECT * FROM consumables ORDER BY name ASC LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_consumable).collect()
    }
}

fn row_to_consumable(row: &SqliteRow) -> Result<Consumable> {
    let type_code: String = row.try_get("consumable_type")?;
    let risk_code: String = row.try_get("addiction_risk")?;
    Ok(Consumable {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        consumable_type: ConsumableType::from_code(&type_code),
        effects: row.try_get("effects")?,
        addiction_risk: AddictionRisk::from_code(&risk_code),
        rads: row.try_get("rads")?,
        base_value: row.try_get("base_value")?,
        weight: row.try_get("weight")?,
        crafting_station: row.try_get("crafting_station")?,
        key_ingredients: row.try_get("key_ingredients")?,
        image_url: row.try_get("image_url")?,
        wiki_url: row.try_get("wiki_url")?,
        explanation: row.try_get("explanation")?,
    })
}
