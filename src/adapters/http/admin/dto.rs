//! HTTP DTOs for admin endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::team::CartItemResponse;
use crate::domain::scoring::GameRules;
use crate::domain::submission::Submission;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters shared by the admin list and export endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseFilterQuery {
    #[serde(default)]
    pub house: Option<String>,
}

/// Judge scores for one submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmissionRequest {
    pub rover_build: i64,
    pub coding: i64,
    pub items_collected: i64,
    pub core_values: i64,
    #[serde(default)]
    pub notes: String,
    pub scored_by: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Judge-entered scores as served back to the scoring screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresResponse {
    pub rover_build: i64,
    pub coding: i64,
    pub items_collected: i64,
    pub items_points: i64,
    pub core_values: i64,
    pub notes: String,
}

/// One submission row for the leaderboard and scoring screens.
///
/// `total_score` is always the live-computed value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: String,
    pub team_name: String,
    pub house: String,
    pub grade: u8,
    pub remaining_budget: i64,
    pub kb_bonus: i64,
    pub total_score: i64,
    pub owned_items: Vec<CartItemResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoresResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scored_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scored_at: Option<String>,
    pub submitted_at: String,
}

impl SubmissionResponse {
    pub fn from_submission(submission: &Submission, rules: &GameRules) -> Self {
        let profile = submission.profile();
        Self {
            id: submission.id().to_string(),
            team_name: submission.team_name().to_string(),
            house: submission.house().to_string(),
            grade: profile.grade(),
            remaining_budget: submission.remaining_budget(),
            kb_bonus: rules.kb_bonus(submission.remaining_budget()),
            total_score: submission.effective_total(rules),
            owned_items: profile
                .owned_items()
                .iter()
                .map(CartItemResponse::from)
                .collect(),
            scores: submission.scores().map(|sheet| ScoresResponse {
                rover_build: sheet.rover_build(),
                coding: sheet.coding(),
                items_collected: sheet.items_collected(),
                items_points: sheet.items_points(),
                core_values: sheet.core_values(),
                notes: sheet.notes().to_string(),
            }),
            scored_by: submission.scored_by().map(str::to_string),
            scored_at: submission.scored_at().map(|at| at.to_rfc3339()),
            submitted_at: submission.submitted_at().to_rfc3339(),
        }
    }
}
