//! List Page Assembler - paginated index projections per entity type

use std::sync::Arc;

use crate::application::dto::{ListItem, ListPayload, PageInfo};
use crate::application::error::WikiError;
use crate::application::ports::outbound::{
    ConsumableRepositoryPort, CreatureRepositoryPort, FactionRepositoryPort,
    LocationRepositoryPort, RegionRepositoryPort,
};
use crate::domain::schema::{DescribableRecord, EntityKind};

/// Allowed page sizes; anything else silently falls back to the default
pub const PAGE_SIZE_CHOICES: [u32; 4] = [15, 30, 60, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// Assembles ordered, paginated index lists for all five collections
pub struct ListService {
    regions: Arc<dyn RegionRepositoryPort>,
    factions: Arc<dyn FactionRepositoryPort>,
    locations: Arc<dyn LocationRepositoryPort>,
    creatures: Arc<dyn CreatureRepositoryPort>,
    consumables: Arc<dyn ConsumableRepositoryPort>,
}

impl ListService {
    pub fn new(
        regions: Arc<dyn RegionRepositoryPort>,
        factions: Arc<dyn FactionRepositoryPort>,
        locations: Arc<dyn LocationRepositoryPort>,
        creatures: Arc<dyn CreatureRepositoryPort>,
        consumables: Arc<dyn ConsumableRepositoryPort>,
    ) -> Self {
        Self {
            regions,
            factions,
            locations,
            creatures,
            consumables,
        }
    }

    /// Normalize a requested page size against the allow-list
    pub fn normalize_page_size(requested: Option<u32>) -> u32 {
        match requested {
            Some(size) if PAGE_SIZE_CHOICES.contains(&size) => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// One page of one collection. Out-of-range page numbers clamp to the
    /// nearest valid page; a malformed size falls back to the default.
    pub async fn page(
        &self,
        kind: EntityKind,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ListPayload, WikiError> {
        let size = Self::normalize_page_size(per_page);

        let total = match kind {
            EntityKind::Region => self.regions.count().await?,
            EntityKind::Faction => self.factions.count().await?,
            EntityKind::Location => self.locations.count().await?,
            EntityKind::Creature => self.creatures.count().await?,
            EntityKind::Consumable => self.consumables.count().await?,
        };

        let total_pages = total.div_ceil(u64::from(size)).max(1) as u32;
        let page_number = page.unwrap_or(1).clamp(1, total_pages);
        let offset = (page_number - 1) * size;

        let items = match kind {
            EntityKind::Region => {
                project(self.regions.list_page(size, offset).await?)
            }
            EntityKind::Faction => {
                project(self.factions.list_page(size, offset).await?)
            }
            EntityKind::Location => {
                project(self.locations.list_page(size, offset).await?)
            }
            EntityKind::Creature => {
                project(self.creatures.list_page(size, offset).await?)
            }
            EntityKind::Consumable => {
                project(self.consumables.list_page(size, offset).await?)
            }
        };

        Ok(ListPayload {
            entity_type: kind.name(),
            page: PageInfo {
                items,
                page_number,
                page_size: size,
                total_pages,
            },
        })
    }
}

fn project<T: DescribableRecord>(records: Vec<T>) -> Vec<ListItem> {
    records
        .iter()
        .map(|record| ListItem {
            id: record.id(),
            display_name: record.display_name().to_string(),
            summary: record.summary(),
            thumbnail: record
                .primary_image_candidates()
                .into_iter()
                .find(|url| !url.is_empty())
                .map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{sample_region, store_with, TestStore};

    fn service_with(store: TestStore) -> ListService {
        ListService::new(
            store.regions,
            store.factions,
            store.locations,
            store.creatures,
            store.consumables,
        )
    }

    fn regions(n: usize) -> Vec<crate::domain::entities::Region> {
        (0..n)
            .map(|i| sample_region(i as i64 + 1, &format!("区域{i:03}")))
            .collect()
    }

    #[test]
    fn test_page_size_allow_list() {
        assert_eq!(ListService::normalize_page_size(Some(15)), 15);
        assert_eq!(ListService::normalize_page_size(Some(30)), 30);
        assert_eq!(ListService::normalize_page_size(Some(60)), 60);
        assert_eq!(ListService::normalize_page_size(Some(100)), 100);
        assert_eq!(ListService::normalize_page_size(Some(999)), 15);
        assert_eq!(ListService::normalize_page_size(Some(0)), 15);
        assert_eq!(ListService::normalize_page_size(None), 15);
    }

    #[tokio::test]
    async fn test_page_payload_shape() {
        let service = service_with(store_with(regions(20), vec![], vec![], vec![], vec![]));
        let payload = service
            .page(EntityKind::Region, Some(2), Some(15))
            .await
            .unwrap();

        assert_eq!(payload.entity_type, "region");
        assert_eq!(payload.page.page_number, 2);
        assert_eq!(payload.page.page_size, 15);
        assert_eq!(payload.page.total_pages, 2);
        assert_eq!(payload.page.items.len(), 5);
    }

    #[tokio::test]
    async fn test_out_of_range_page_clamps() {
        let service = service_with(store_with(regions(20), vec![], vec![], vec![], vec![]));

        let last = service
            .page(EntityKind::Region, Some(99), Some(15))
            .await
            .unwrap();
        assert_eq!(last.page.page_number, 2);

        let first = service
            .page(EntityKind::Region, Some(0), Some(15))
            .await
            .unwrap();
        assert_eq!(first.page.page_number, 1);
    }

    #[tokio::test]
    async fn test_empty_collection_is_one_empty_page() {
        let service = service_with(store_with(vec![], vec![], vec![], vec![], vec![]));
        let payload = service.page(EntityKind::Creature, None, None).await.unwrap();
        assert_eq!(payload.page.total_pages, 1);
        assert_eq!(payload.page.page_number, 1);
        assert!(payload.page.items.is_empty());
    }

    #[tokio::test]
    async fn test_items_ordered_by_display_name() {
        let mut rows = regions(3);
        rows.reverse();
        let service = service_with(store_with(rows, vec![], vec![], vec![], vec![]));
        let payload = service.page(EntityKind::Region, None, None).await.unwrap();
        let names: Vec<&str> = payload
            .page
            .items
            .iter()
            .map(|i| i.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["区域000", "区域001", "区域002"]);
    }

    #[tokio::test]
    async fn test_disallowed_size_falls_back_in_payload() {
        let service = service_with(store_with(regions(1), vec![], vec![], vec![], vec![]));
        let payload = service
            .page(EntityKind::Region, None, Some(999))
            .await
            .unwrap();
        assert_eq!(payload.page.page_size, 15);
    }
}
