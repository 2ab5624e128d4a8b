//! HTTP adapter for the parts catalog.

mod handlers;
mod routes;

pub use handlers::{CatalogResponse, PartResponse};
pub use routes::catalog_routes;
