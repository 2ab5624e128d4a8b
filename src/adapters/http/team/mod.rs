//! HTTP adapter for team endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddToCartRequest, CartItemResponse, CartLineRequest, CreateTeamRequest, SellItemRequest,
    SellItemResponse, SubmitResponse, TeamResponse,
};
pub use handlers::TeamHandlers;
pub use routes::team_routes;
