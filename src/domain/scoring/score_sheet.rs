//! Judge-entered scores and the derived total.

use serde::{Deserialize, Serialize};

use super::rules::GameRules;
use crate::domain::foundation::ValidationError;

/// Maximum rover build score.
pub const MAX_ROVER_BUILD: i64 = 20;

/// Maximum coding score.
pub const MAX_CODING: i64 = 25;

/// Maximum core values score.
pub const MAX_CORE_VALUES: i64 = 10;

/// Points per collected item.
pub const POINTS_PER_ITEM: i64 = 3;

/// Validated judge inputs for one submission.
///
/// Notes are free text and never contribute to the numeric total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    rover_build: i64,
    coding: i64,
    items_collected: i64,
    core_values: i64,
    #[serde(default)]
    notes: String,
}

impl ScoreSheet {
    /// Creates a score sheet, validating every range.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if rover build is outside 0-20, coding outside 0-25,
    ///   core values outside 0-10, or items collected is negative
    pub fn new(
        rover_build: i64,
        coding: i64,
        items_collected: i64,
        core_values: i64,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !(0..=MAX_ROVER_BUILD).contains(&rover_build) {
            return Err(ValidationError::out_of_range(
                "rover_build",
                0,
                MAX_ROVER_BUILD,
                rover_build,
            ));
        }
        if !(0..=MAX_CODING).contains(&coding) {
            return Err(ValidationError::out_of_range("coding", 0, MAX_CODING, coding));
        }
        if items_collected < 0 {
            return Err(ValidationError::out_of_range(
                "items_collected",
                0,
                i64::MAX,
                items_collected,
            ));
        }
        if !(0..=MAX_CORE_VALUES).contains(&core_values) {
            return Err(ValidationError::out_of_range(
                "core_values",
                0,
                MAX_CORE_VALUES,
                core_values,
            ));
        }
        Ok(Self {
            rover_build,
            coding,
            items_collected,
            core_values,
            notes: notes.into(),
        })
    }

    /// Rover build score (0-20).
    pub fn rover_build(&self) -> i64 {
        self.rover_build
    }

    /// Coding score (0-25).
    pub fn coding(&self) -> i64 {
        self.coding
    }

    /// Number of items collected on the course.
    pub fn items_collected(&self) -> i64 {
        self.items_collected
    }

    /// Points contributed by collected items.
    pub fn items_points(&self) -> i64 {
        self.items_collected * POINTS_PER_ITEM
    }

    /// Core values score (0-10).
    pub fn core_values(&self) -> i64 {
        self.core_values
    }

    /// Judge notes.
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Total score for a sheet against the submission's remaining budget.
///
/// Pure: same inputs always produce the same output. Call sites must pass
/// live inputs rather than a stale persisted total.
pub fn total_score(sheet: &ScoreSheet, remaining_budget: i64, rules: &GameRules) -> i64 {
    sheet.rover_build()
        + sheet.coding()
        + sheet.items_points()
        + sheet.core_values()
        + rules.kb_bonus(remaining_budget)
}
