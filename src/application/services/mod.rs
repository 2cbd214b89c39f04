//! Application services - classifier and page assemblers

mod classifier;
mod detail_service;
mod faction_chart;
mod list_service;

pub use classifier::{classify, Category, CategoryMap, ClassifiedFields, NO_TOKEN, YES_TOKEN};
pub use detail_service::DetailService;
pub use faction_chart::faction_chart;
pub use list_service::{ListService, DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};
