//! HTTP routes for team endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    add_to_cart, checkout, create_team, get_team, remove_from_cart, sell_item, submit_build,
    TeamHandlers,
};

/// Creates the team router with the whole shop flow.
pub fn team_routes(handlers: TeamHandlers) -> Router {
    Router::new()
        .route("/", post(create_team))
        .route("/:id", get(get_team))
        .route("/:id/cart", post(add_to_cart))
        .route("/:id/cart/:part_id", delete(remove_from_cart))
        .route("/:id/checkout", post(checkout))
        .route("/:id/sell", post(sell_item))
        .route("/:id/submit", post(submit_build))
        .with_state(handlers)
}
