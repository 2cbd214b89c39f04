//! Repository ports - Read-only record store interfaces
//!
//! These traits define the contracts that infrastructure repositories must
//! implement. The wiki layer only ever reads: one record by key, a count,
//! and an ordered page. Writes happen exclusively in the admin/batch layer
//! outside this crate.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Consumable, Creature, Faction, Location, Region};

/// Repository port for Region reads
#[async_trait]
pub trait RegionRepositoryPort: Send + Sync {
    /// Get a region by ID
    async fn get(&self, id: i64) -> Result<Option<Region>>;

    /// Total number of regions
    async fn count(&self) -> Result<u64>;

    /// One page of regions, ordered by display name ascending
    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Region>>;
}

/// Repository port for Faction reads
#[async_trait]
pub trait FactionRepositoryPort: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Faction>>;

    async fn count(&self) -> Result<u64>;

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Faction>>;
}

/// Repository port for Location reads
///
/// Implementations resolve the nullable region / controlling-faction
/// references to display names at read time.
#[async_trait]
pub trait LocationRepositoryPort: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Location>>;

    async fn count(&self) -> Result<u64>;

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Location>>;
}

/// Repository port for Creature reads
#[async_trait]
pub trait CreatureRepositoryPort: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Creature>>;

    async fn count(&self) -> Result<u64>;

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Creature>>;
}

/// Repository port for Consumable reads
#[async_trait]
pub trait ConsumableRepositoryPort: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Consumable>>;

    async fn count(&self) -> Result<u64>;

    async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Consumable>>;
}
