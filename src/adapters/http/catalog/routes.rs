//! HTTP routes for the parts catalog.

use axum::{routing::get, Router};

use super::handlers::get_catalog;

/// Creates the catalog router.
pub fn catalog_routes() -> Router {
    Router::new().route("/", get(get_catalog))
}
