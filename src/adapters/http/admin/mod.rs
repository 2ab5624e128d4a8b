//! HTTP adapter for admin endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{HouseFilterQuery, ScoreSubmissionRequest, ScoresResponse, SubmissionResponse};
pub use handlers::AdminHandlers;
pub use routes::admin_routes;
