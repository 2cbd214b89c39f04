//! Entity records served by the wiki

mod consumable;
mod creature;
mod faction;
mod location;
mod region;

pub use consumable::{AddictionRisk, Consumable, ConsumableType};
pub use creature::{Creature, CreatureType, ThreatLevel};
pub use faction::{Faction, Hostility, TechLevel};
pub use location::{Location, LocationType};
pub use region::{RadiationLevel, Region};
