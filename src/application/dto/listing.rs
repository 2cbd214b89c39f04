//! Index page payloads

use serde::Serialize;

/// One row of an index list
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: i64,
    pub display_name: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// One page of an entity collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub items: Vec<ListItem>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// A paginated projection of one entity collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPayload {
    pub entity_type: &'static str,
    pub page: PageInfo,
}

/// The whole index page: five independently paginated lists
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPayload {
    pub active_tab: &'static str,
    pub per_page: u32,
    pub lists: Vec<ListPayload>,
}
