//! HTTP surface of the wiki

mod wiki_routes;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use wiki_routes::*;

/// Create the wiki routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(wiki_routes::wiki_index))
        .route("/{entity_type}/{id}/", get(wiki_routes::wiki_detail))
}
