//! SQLite record store repositories
//!
//! Read-only at the port surface: each repository bootstraps its table on
//! construction so a fresh database serves empty pages, then only ever
//! issues SELECTs. Population happens in the admin/batch layer outside this
//! crate.

mod consumable_repository;
mod creature_repository;
mod faction_repository;
mod location_repository;
mod region_repository;

pub use consumable_repository::SqliteConsumableRepository;
pub use creature_repository::SqliteCreatureRepository;
pub use faction_repository::SqliteFactionRepository;
pub use location_repository::SqliteLocationRepository;
pub use region_repository::SqliteRegionRepository;
