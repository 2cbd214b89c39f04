//! In-memory record store doubles shared by service tests

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::outbound::{
    ConsumableRepositoryPort, CreatureRepositoryPort, FactionRepositoryPort,
    LocationRepositoryPort, RegionRepositoryPort,
};
use crate::domain::entities::{
    AddictionRisk, Consumable, ConsumableType, Creature, CreatureType, Faction, Hostility,
    Location, LocationType, RadiationLevel, Region, TechLevel, ThreatLevel,
};
use crate::domain::schema::DescribableRecord;

pub(crate) struct TestStore {
    pub regions: Arc<dyn RegionRepositoryPort>,
    pub factions: Arc<dyn FactionRepositoryPort>,
    pub locations: Arc<dyn LocationRepositoryPort>,
    pub creatures: Arc<dyn CreatureRepositoryPort>,
    pub consumables: Arc<dyn ConsumableRepositoryPort>,
}

/// Build a store double seeded with the given rows
pub(crate) fn store_with(
    regions: Vec<Region>,
    factions: Vec<Faction>,
    locations: Vec<Location>,
    creatures: Vec<Creature>,
    consumables: Vec<Consumable>,
) -> TestStore {
    TestStore {
        regions: Arc::new(InMemory(regions)),
        factions: Arc::new(InMemory(factions)),
        locations: Arc::new(InMemory(locations)),
        creatures: Arc::new(InMemory(creatures)),
        consumables: Arc::new(InMemory(consumables)),
    }
}

struct InMemory<T>(Vec<T>);

impl<T: DescribableRecord + Clone> InMemory<T> {
    fn get_by_id(&self, id: i64) -> Option<T> {
        self.0.iter().find(|r| r.id() == id).cloned()
    }

    fn page(&self, limit: u32, offset: u32) -> Vec<T> {
        let mut rows = self.0.clone();
        rows.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        rows.into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }
}

macro_rules! impl_in_memory_port {
    ($port:ident, $entity:ty) => {
        #[async_trait]
        impl $port for InMemory<$entity> {
            async fn get(&self, id: i64) -> Result<Option<$entity>> {
                Ok(self.get_by_id(id))
            }

            async fn count(&self) -> Result<u64> {
                Ok(self.0.len() as u64)
            }

            async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<$entity>> {
                Ok(self.page(limit, offset))
            }
        }
    };
}

impl_in_memory_port!(RegionRepositoryPort, Region);
impl_in_memory_port!(FactionRepositoryPort, Faction);
impl_in_memory_port!(LocationRepositoryPort, Location);
impl_in_memory_port!(CreatureRepositoryPort, Creature);
impl_in_memory_port!(ConsumableRepositoryPort, Consumable);

pub(crate) fn sample_region(id: i64, name: &str) -> Region {
    Region {
        id,
        name: name.to_string(),
        description: String::new(),
        map_image_url: String::new(),
        radiation_level: RadiationLevel::Low,
        weather_pattern: String::new(),
        discovered_date: String::new(),
        primary_threat: String::new(),
        economic_activity: String::new(),
        pre_war_purpose: String::new(),
        number_of_settlements: 0,
        major_landmarks: String::new(),
        water_source: String::new(),
        connectivity: String::new(),
        lore_entry: String::new(),
        map_coordinates: String::new(),
        explanation: String::new(),
    }
}

pub(crate) fn sample_faction(id: i64, name: &str) -> Faction {
    Faction {
        id,
        name: name.to_string(),
        ideology: String::new(),
        leader: String::new(),
        logo_url: String::new(),
        is_joinable: false,
        tech_level: TechLevel::Scavenged,
        hostility_status: Hostility::Neutral,
        wiki_url: String::new(),
        founding_year: None,
        recruitment_policy: String::new(),
        base_of_operations: String::new(),
        allies: String::new(),
        enemies: String::new(),
        equipment_standard: String::new(),
        faction_size: String::new(),
        notable_members: String::new(),
        player_rep_impact: String::new(),
        quote: String::new(),
        explanation: String::new(),
        image_url_2: String::new(),
        image_url_3: String::new(),
        image_url_4: String::new(),
    }
}

pub(crate) fn sample_location(id: i64, code: &str, name_cn: &str) -> Location {
    Location {
        id,
        code: code.to_string(),
        name_cn: name_cn.to_string(),
        notes: String::new(),
        region_id: None,
        region_name: None,
        controlling_faction_id: None,
        controlling_faction_name: None,
        parent_location_group: String::new(),
        location_type: LocationType::Landmark,
        description: String::new(),
        is_settlement: false,
        has_workbench: false,
        is_cleared: false,
        difficulty: 1,
        notable_loot: String::new(),
        screenshot_url: String::new(),
        interior_cell_count: 1,
        respawn_rate: String::new(),
        primary_enemies: String::new(),
        quest_starter: false,
        related_quests: String::new(),
        has_power_armor_station: false,
        has_cooking_station: false,
        has_chemistry_station: false,
        is_underwater: false,
        access_requires: String::new(),
        explanation: String::new(),
        location_wiki_url: String::new(),
        atmosphere_lore: String::new(),
        visuals_desc: String::new(),
    }
}

#[allow(dead_code)]
pub(crate) fn sample_creature(id: i64, name: &str) -> Creature {
    Creature {
        id,
        name: name.to_string(),
        creature_type: CreatureType::Animal,
        threat_level: ThreatLevel::Low,
        habitat: String::new(),
        weakness: String::new(),
        resistances: String::new(),
        behavior: String::new(),
        loot_drops: String::new(),
        variants: String::new(),
        screenshot_url: String::new(),
        wiki_url: String::new(),
        lore_entry: String::new(),
        explanation: String::new(),
    }
}

#[allow(dead_code)]
pub(crate) fn sample_consumable(id: i64, name: &str) -> Consumable {
    Consumable {
        id,
        name: name.to_string(),
        consumable_type: ConsumableType::Food,
        effects: String::new(),
        addiction_risk: AddictionRisk::None,
        rads: 0,
        base_value: 0,
        weight: 0.0,
        crafting_station: String::new(),
        key_ingredients: String::new(),
        image_url: String::new(),
        wiki_url: String::new(),
        explanation: String::new(),
    }
}
