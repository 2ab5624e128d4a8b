//! Scoring engine: game rules, judge score sheets, and the total formula.

mod rules;
mod score_sheet;

pub use rules::GameRules;
pub use score_sheet::{
    total_score, ScoreSheet, MAX_CODING, MAX_CORE_VALUES, MAX_ROVER_BUILD, POINTS_PER_ITEM,
};
