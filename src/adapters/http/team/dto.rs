//! HTTP DTOs for team endpoints.
//!
//! These types decouple the wire shapes from domain types. Field names match
//! the stored document shape (camelCase).

use serde::{Deserialize, Serialize};

use crate::domain::team::CartItem;
use crate::ports::TeamRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to register a team at login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub grade: u8,
    pub house: String,
    pub team_name: String,
}

/// One requested cart line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineRequest {
    pub part_id: String,
    pub quantity: u32,
}

/// Request to add parts to the cart.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToCartRequest {
    pub items: Vec<CartLineRequest>,
}

/// Request to sell owned parts back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellItemRequest {
    pub part_id: String,
    pub quantity: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One cart or inventory line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub category: String,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            category: item.category.to_string(),
        }
    }
}

/// A team's full state as served to the shop screens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: String,
    pub grade: u8,
    pub house: String,
    pub team_name: String,
    pub budget: i64,
    pub spent: i64,
    pub remaining: i64,
    pub can_checkout: bool,
    pub cart: Vec<CartItemResponse>,
    pub owned_items: Vec<CartItemResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TeamRecord> for TeamResponse {
    fn from(record: &TeamRecord) -> Self {
        let profile = &record.profile;
        Self {
            id: record.id.to_string(),
            grade: profile.grade(),
            house: profile.house().to_string(),
            team_name: profile.team_name().to_string(),
            budget: profile.budget(),
            spent: profile.spent(),
            remaining: profile.remaining(),
            can_checkout: profile.can_checkout(),
            cart: profile.cart().iter().map(CartItemResponse::from).collect(),
            owned_items: profile
                .owned_items()
                .iter()
                .map(CartItemResponse::from)
                .collect(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Response after selling parts back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellItemResponse {
    pub credited: i64,
    pub team: TeamResponse,
}

/// Receipt for a submitted build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub submission_id: String,
    pub message: String,
}
