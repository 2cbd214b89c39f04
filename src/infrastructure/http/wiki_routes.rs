//! Wiki index and detail routes
//!
//! Pagination parameters are parsed leniently: anything that does not parse
//! as a number is treated as absent and normalized downstream, never a 400.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{DetailPayload, IndexPayload};
use crate::application::error::WikiError;
use crate::domain::schema::EntityKind;
use crate::infrastructure::state::AppState;

const DEFAULT_TAB: EntityKind = EntityKind::Region;

/// Index page: five independently paginated lists
pub async fn wiki_index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<IndexPayload>, (StatusCode, String)> {
    let per_page = uint_param(&params, "per_page");
    let active_tab = params
        .get("tab")
        .and_then(|t| EntityKind::parse(t))
        .unwrap_or(DEFAULT_TAB);

    let mut lists = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        let page = uint_param(&params, &format!("{}_page", kind.name()));
        let payload = state
            .list_service
            .page(kind, page, per_page)
            .await
            .map_err(reject)?;
        lists.push(payload);
    }

    // Effective size is uniform across tabs, so read it off the first list
    let per_page = lists[0].page.page_size;

    Ok(Json(IndexPayload {
        active_tab: active_tab.name(),
        per_page,
        lists,
    }))
}

/// Detail page for one record
pub async fn wiki_detail(
    State(state): State<Arc<AppState>>,
    Path((entity_type, id)): Path<(String, String)>,
) -> Result<Json<DetailPayload>, (StatusCode, String)> {
    // Non-numeric ids never match a record
    let id: i64 = id
        .parse()
        .map_err(|_| reject(WikiError::NotFound(WikiError::RECORD_ABSENT)))?;

    let payload = state
        .detail_service
        .assemble(&entity_type, id)
        .await
        .map_err(reject)?;

    Ok(Json(payload))
}

fn uint_param(params: &HashMap<String, String>, name: &str) -> Option<u32> {
    params.get(name).and_then(|v| v.parse().ok())
}

fn reject(err: WikiError) -> (StatusCode, String) {
    match err {
        WikiError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        WikiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_uint_param_parses_numeric_value() {
        assert_eq!(uint_param(&params(&[("per_page", "30")]), "per_page"), Some(30));
    }

    #[test]
    fn test_uint_param_treats_garbage_as_absent() {
        // Unparseable values normalize downstream instead of rejecting the request
        assert_eq!(uint_param(&params(&[("per_page", "abc")]), "per_page"), None);
        assert_eq!(uint_param(&params(&[("per_page", "-1")]), "per_page"), None);
        assert_eq!(uint_param(&params(&[("per_page", "")]), "per_page"), None);
    }

    #[test]
    fn test_uint_param_missing_key_is_absent() {
        assert_eq!(uint_param(&params(&[("tab", "faction")]), "per_page"), None);
    }

    #[test]
    fn test_reject_maps_error_variants_to_status() {
        let (status, _) = reject(WikiError::NotFound(WikiError::RECORD_ABSENT));
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = reject(WikiError::Store(anyhow::anyhow!("disk gone")));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
