//! Administrative interface for profileweb.
//!
//! The profile service itself carries no administrative functionality; this
//! module owns the `/admin` prefix so the main router can delegate the whole
//! subtree. Currently a placeholder index with no registered models.
//!
use std::sync::Arc;

use axum::{Router, response::Html, routing::get};

use crate::{html::ADMIN_INDEX_PAGE, server::AppState};

/// Build the router for the administrative subtree
///
/// Registers the index under both `/admin` and `/admin/`; axum matches
/// trailing-slash paths as distinct routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(index_page))
        .route("/admin/", get(index_page))
}

/// Display the administrative index page
async fn index_page() -> Html<&'static str> {
    Html(ADMIN_INDEX_PAGE)
}
