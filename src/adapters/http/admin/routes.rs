//! HTTP routes for admin endpoints, behind the admin gate.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::adapters::http::middleware::{admin_gate, AdminGate};

use super::handlers::{
    create_submission, delete_submission, export_scores, list_submissions, list_teams,
    score_submission, AdminHandlers,
};

/// Creates the admin router. Every route sits behind the gate.
pub fn admin_routes(handlers: AdminHandlers, gate: Arc<AdminGate>) -> Router {
    Router::new()
        .route("/teams", get(list_teams))
        .route("/teams/:id/submission", post(create_submission))
        .route("/submissions", get(list_submissions))
        .route("/submissions/:id/scores", put(score_submission))
        .route("/submissions/:id", delete(delete_submission))
        .route("/export", get(export_scores))
        .route_layer(middleware::from_fn_with_state(gate, admin_gate))
        .with_state(handlers)
}
