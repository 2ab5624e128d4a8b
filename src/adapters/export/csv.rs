//! CSV export of scored submissions.
//!
//! Every field is double-quoted (embedded quotes doubled) so part names and
//! free-text notes can carry commas. Score columns of an unscored submission
//! are left blank; the total column is always the live-computed value, never
//! the persisted one.

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::GameRules;
use crate::domain::submission::Submission;
use crate::domain::team::CartItem;

/// Fixed header row for the scores export.
pub const EXPORT_HEADERS: [&str; 14] = [
    "Team Name",
    "House",
    "Budget Spent",
    "Budget Remaining",
    "KB Bonus",
    "Rover Build",
    "Coding",
    "Items Collected",
    "Items Points",
    "Core Values",
    "Total Score",
    "Parts",
    "Notes",
    "Submitted At",
];

/// Download filename for an export generated at `at`:
/// `rover-scores-<unixtime-ms>.csv`.
pub fn export_filename(at: Timestamp) -> String {
    format!("rover-scores-{}.csv", at.as_unix_millis())
}

/// Renders submissions as CSV, one row per submission in the given order.
pub fn submissions_to_csv(submissions: &[Submission], rules: &GameRules) -> String {
    let mut out = String::new();
    push_row(&mut out, EXPORT_HEADERS.iter().map(|h| h.to_string()));
    for submission in submissions {
        push_row(&mut out, submission_row(submission, rules));
    }
    out
}

fn submission_row(submission: &Submission, rules: &GameRules) -> impl Iterator<Item = String> {
    let profile = submission.profile();
    let remaining = submission.remaining_budget();
    let spent_on_parts: i64 = profile.owned_items().iter().map(CartItem::line_total).sum();

    let (rover_build, coding, items_collected, items_points, core_values, notes) =
        match submission.scores() {
            Some(sheet) => (
                sheet.rover_build().to_string(),
                sheet.coding().to_string(),
                sheet.items_collected().to_string(),
                sheet.items_points().to_string(),
                sheet.core_values().to_string(),
                sheet.notes().to_string(),
            ),
            None => Default::default(),
        };

    vec![
        profile.team_name().to_string(),
        profile.house().to_string(),
        spent_on_parts.to_string(),
        remaining.to_string(),
        rules.kb_bonus(remaining).to_string(),
        rover_build,
        coding,
        items_collected,
        items_points,
        core_values,
        submission.effective_total(rules).to_string(),
        parts_list(profile.owned_items()),
        notes,
        submission.submitted_at().to_rfc3339(),
    ]
    .into_iter()
}

/// Owned parts as `name (quantity)`, joined with `"; "`.
fn parts_list(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("; ")
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let row = fields
        .map(|field| quote_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&row);
    out.push('\n');
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
