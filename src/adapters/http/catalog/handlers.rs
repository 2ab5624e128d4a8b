//! HTTP handlers for the parts catalog.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::catalog::{Part, PARTS_CATALOG};

/// One catalog part as served to the shop screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl From<&Part> for PartResponse {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id.to_string(),
            name: part.name.to_string(),
            price: part.price,
            category: part.category.to_string(),
        }
    }
}

/// The whole catalog, in shop display order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub parts: Vec<PartResponse>,
}

/// GET /api/catalog - the static parts catalog
pub async fn get_catalog() -> impl IntoResponse {
    let response = CatalogResponse {
        parts: PARTS_CATALOG.iter().map(PartResponse::from).collect(),
    };
    (StatusCode::OK, Json(response))
}
