//! Detail Page Assembler - resolves one record and builds its render payload

use std::sync::Arc;

use crate::application::dto::DetailPayload;
use crate::application::error::WikiError;
use crate::application::ports::outbound::{
    ConsumableRepositoryPort, CreatureRepositoryPort, FactionRepositoryPort,
    LocationRepositoryPort, RegionRepositoryPort,
};
use crate::application::services::{classify, faction_chart, CategoryMap};
use crate::domain::schema::{DescribableRecord, EntityKind};

/// Assembles detail payloads for all five entity types
///
/// Read-only: resolves a record through its repository port, classifies its
/// snapshot and never mutates anything.
pub struct DetailService {
    regions: Arc<dyn RegionRepositoryPort>,
    factions: Arc<dyn FactionRepositoryPort>,
    locations: Arc<dyn LocationRepositoryPort>,
    creatures: Arc<dyn CreatureRepositoryPort>,
    consumables: Arc<dyn ConsumableRepositoryPort>,
    categories: CategoryMap,
}

impl DetailService {
    pub fn new(
        regions: Arc<dyn RegionRepositoryPort>,
        factions: Arc<dyn FactionRepositoryPort>,
        locations: Arc<dyn LocationRepositoryPort>,
        creatures: Arc<dyn CreatureRepositoryPort>,
        consumables: Arc<dyn ConsumableRepositoryPort>,
        categories: CategoryMap,
    ) -> Self {
        Self {
            regions,
            factions,
            locations,
            creatures,
            consumables,
            categories,
        }
    }

    /// Resolve an entity by type selector and id and build its detail payload
    ///
    /// Unknown selectors and absent records both surface as `NotFound`.
    pub async fn assemble(&self, kind_segment: &str, id: i64) -> Result<DetailPayload, WikiError> {
        let kind = EntityKind::parse(kind_segment)
            .ok_or(WikiError::NotFound(WikiError::UNKNOWN_ENTITY_TYPE))?;

        match kind {
            EntityKind::Region => {
                let record = self
                    .regions
                    .get(id)
                    .await?
                    .ok_or(WikiError::NotFound(WikiError::RECORD_ABSENT))?;
                Ok(self.project(&record))
            }
            EntityKind::Faction => {
                let record = self
                    .factions
                    .get(id)
                    .await?
                    .ok_or(WikiError::NotFound(WikiError::RECORD_ABSENT))?;
                let mut payload = self.project(&record);
                payload.chart_data = Some(faction_chart(&record));
                Ok(payload)
            }
            EntityKind::Location => {
                let record = self
                    .locations
                    .get(id)
                    .await?
                    .ok_or(WikiError::NotFound(WikiError::RECORD_ABSENT))?;
                Ok(self.project(&record))
            }
            EntityKind::Creature => {
                let record = self
                    .creatures
                    .get(id)
                    .await?
                    .ok_or(WikiError::NotFound(WikiError::RECORD_ABSENT))?;
                Ok(self.project(&record))
            }
            EntityKind::Consumable => {
                let record = self
                    .consumables
                    .get(id)
                    .await?
                    .ok_or(WikiError::NotFound(WikiError::RECORD_ABSENT))?;
                Ok(self.project(&record))
            }
        }
    }

    fn project<T: DescribableRecord>(&self, record: &T) -> DetailPayload {
        let classified = classify(&record.snapshot(), &self.categories);

        let mut images: Vec<String> = Vec::new();
        if let Some(main) = record
            .primary_image_candidates()
            .into_iter()
            .find(|url| !url.is_empty())
        {
            images.push(main.to_string());
        }
        for extra in record.additional_images() {
            if !extra.is_empty() {
                images.push(extra.to_string());
            }
        }

        DetailPayload {
            entity_type: record.kind().name(),
            display_name: record.display_name().to_string(),
            images,
            fields: classified.rows,
            navigation: classified.navigation,
            chart_data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        sample_faction, sample_location, sample_region, store_with, TestStore,
    };
    use crate::domain::entities::{Hostility, TechLevel};

    fn service_with(store: TestStore) -> DetailService {
        DetailService::new(
            store.regions,
            store.factions,
            store.locations,
            store.creatures,
            store.consumables,
            CategoryMap::standard(),
        )
    }

    #[tokio::test]
    async fn test_unknown_entity_type_is_not_found() {
        let service = service_with(store_with(vec![], vec![], vec![], vec![], vec![]));
        let err = service.assemble("vault", 1).await.unwrap_err();
        assert!(matches!(err, WikiError::NotFound(m) if m == WikiError::UNKNOWN_ENTITY_TYPE));
    }

    #[tokio::test]
    async fn test_absent_record_is_not_found() {
        let service = service_with(store_with(
            vec![sample_region(1, "联邦")],
            vec![],
            vec![],
            vec![],
            vec![],
        ));
        let err = service.assemble("region", 999).await.unwrap_err();
        assert!(matches!(err, WikiError::NotFound(m) if m == WikiError::RECORD_ABSENT));
    }

    #[tokio::test]
    async fn test_abernathy_farm_detail() {
        let mut location = sample_location(5, "AbernathyFarmExt", "阿伯纳西农场");
        location.screenshot_url = "http://img/abernathy.png".to_string();

        let service = service_with(store_with(vec![], vec![], vec![location], vec![], vec![]));
        let payload = service.assemble("location", 5).await.unwrap();

        assert_eq!(payload.display_name, "阿伯纳西农场");
        assert_eq!(payload.images, vec!["http://img/abernathy.png".to_string()]);
        // Cleared references produce no rows
        assert!(!payload.fields.iter().any(|f| f.label == "所属区域"));
        assert!(!payload.fields.iter().any(|f| f.label == "控制派系"));
        assert!(payload.chart_data.is_none());
    }

    #[tokio::test]
    async fn test_display_name_falls_back_to_code() {
        let location = sample_location(6, "SanctuaryExt", "");
        let service = service_with(store_with(vec![], vec![], vec![location], vec![], vec![]));
        let payload = service.assemble("location", 6).await.unwrap();
        assert_eq!(payload.display_name, "SanctuaryExt");
    }

    #[tokio::test]
    async fn test_faction_detail_carries_chart() {
        let mut faction = sample_faction(2, "学院");
        faction.tech_level = TechLevel::CuttingEdge;
        faction.hostility_status = Hostility::Hostile;
        faction.logo_url = "http://img/institute.png".to_string();
        faction.image_url_3 = "http://img/institute-3.png".to_string();

        let service = service_with(store_with(vec![], vec![faction], vec![], vec![], vec![]));
        let payload = service.assemble("faction", 2).await.unwrap();

        let chart = payload.chart_data.expect("faction detail must carry chart");
        assert_eq!(chart.values[0], 10);
        assert_eq!(chart.values[2], 9);
        // Main logo first, then the only non-empty numbered image
        assert_eq!(
            payload.images,
            vec![
                "http://img/institute.png".to_string(),
                "http://img/institute-3.png".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_identifier_absent_from_fields() {
        let region = sample_region(9, "光荣海");
        let service = service_with(store_with(vec![region], vec![], vec![], vec![], vec![]));
        let payload = service.assemble("region", 9).await.unwrap();
        assert!(!payload.fields.iter().any(|f| f.label == "ID" || f.label == "id"));
    }
}
