//! Submission aggregate - a frozen team build awaiting judge scores.
//!
//! A submission is created exactly once per team, at submit time; the team's
//! active record is retired in the same operation. Judge scores arrive later
//! and can be revised; the numeric total is recomputed from live inputs, with
//! the persisted total kept only as a fallback for standalone reads.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{House, SubmissionId, Timestamp};
use crate::domain::scoring::{total_score, GameRules, ScoreSheet};
use crate::domain::team::TeamProfile;

/// A team's build, snapshotted at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    id: SubmissionId,

    #[serde(flatten)]
    profile: TeamProfile,

    submitted_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    scores: Option<ScoreSheet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    scored_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    scored_at: Option<Timestamp>,

    /// Total at the last save; a fallback only, never authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_score: Option<i64>,
}

impl Submission {
    /// Freezes a team profile into an unscored submission.
    pub fn from_team(id: SubmissionId, profile: TeamProfile, submitted_at: Timestamp) -> Self {
        Self {
            id,
            profile,
            submitted_at,
            scores: None,
            scored_by: None,
            scored_at: None,
            total_score: None,
        }
    }

    /// Returns the submission id.
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    /// The frozen team snapshot.
    pub fn profile(&self) -> &TeamProfile {
        &self.profile
    }

    /// The submitting team's house.
    pub fn house(&self) -> House {
        self.profile.house()
    }

    /// The submitting team's name.
    pub fn team_name(&self) -> &str {
        self.profile.team_name()
    }

    /// KB unspent at submission, the input to the bonus formula.
    pub fn remaining_budget(&self) -> i64 {
        self.profile.budget()
    }

    /// When the build was submitted.
    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }

    /// Judge scores, when entered.
    pub fn scores(&self) -> Option<&ScoreSheet> {
        self.scores.as_ref()
    }

    /// Who entered the scores.
    pub fn scored_by(&self) -> Option<&str> {
        self.scored_by.as_deref()
    }

    /// When scores were last saved.
    pub fn scored_at(&self) -> Option<&Timestamp> {
        self.scored_at.as_ref()
    }

    /// Whether a judge has scored this submission.
    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }

    /// Records judge scores and caches the total for standalone reads.
    pub fn apply_scores(
        &mut self,
        sheet: ScoreSheet,
        scored_by: impl Into<String>,
        at: Timestamp,
        rules: &GameRules,
    ) {
        self.total_score = Some(total_score(&sheet, self.remaining_budget(), rules));
        self.scores = Some(sheet);
        self.scored_by = Some(scored_by.into());
        self.scored_at = Some(at);
    }

    /// The total to display: live-computed when score inputs are present,
    /// the persisted value otherwise (e.g. an unscored record loaded
    /// standalone), defaulting to 0.
    pub fn effective_total(&self, rules: &GameRules) -> i64 {
        match &self.scores {
            Some(sheet) => total_score(sheet, self.remaining_budget(), rules),
            None => self.total_score.unwrap_or(0),
        }
    }
}

/// Orders submissions for the leaderboard: descending by live total, stable
/// so ties keep their arrival order.
pub fn rank_submissions(submissions: &mut [Submission], rules: &GameRules) {
    submissions.sort_by_key(|s| std::cmp::Reverse(s.effective_total(rules)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::find_part;
    use crate::domain::foundation::House;
    use crate::domain::team::CartItem;

    fn submitted_profile(team_name: &str, spend: &[(&str, u32)]) -> TeamProfile {
        let mut profile =
            TeamProfile::new(1, House::Cougar, team_name, &GameRules::default()).unwrap();
        let lines: Vec<CartItem> = spend
            .iter()
            .map(|(id, qty)| CartItem::from_part(find_part(id).unwrap(), *qty))
            .collect();
        profile.add_to_cart(lines);
        profile.checkout();
        profile
    }

    fn test_submission(team_name: &str) -> Submission {
        Submission::from_team(
            SubmissionId::new(),
            submitted_profile(team_name, &[("large_hub", 1), ("small_motor", 2)]),
            Timestamp::from_unix_millis(1_700_000_000_000),
        )
    }

    #[test]
    fn test_unscored_submission_totals_zero() {
        let submission = test_submission("Unscored");
        assert!(!submission.is_scored());
        assert_eq!(submission.effective_total(&GameRules::default()), 0);
    }

    #[test]
    fn test_apply_scores_computes_live_total() {
        let rules = GameRules::default();
        let mut submission = test_submission("Scored");
        // 120 - 60 spent leaves 60 remaining: bonus 30
        let sheet = ScoreSheet::new(15, 20, 4, 8, "clean run").unwrap();

        submission.apply_scores(sheet, "teacher", Timestamp::from_unix_millis(0), &rules);

        assert!(submission.is_scored());
        assert_eq!(submission.effective_total(&rules), 85);
        assert_eq!(submission.scored_by(), Some("teacher"));
    }

    #[test]
    fn test_persisted_total_is_only_a_fallback() {
        let rules = GameRules::default();
        let mut submission = test_submission("Fallback");
        let sheet = ScoreSheet::new(10, 10, 0, 5, "").unwrap();
        submission.apply_scores(sheet, "teacher", Timestamp::from_unix_millis(0), &rules);

        // A stale cached value must lose to the live computation.
        submission.total_score = Some(1);
        assert_eq!(submission.effective_total(&rules), 10 + 10 + 5 + 30);
    }

    #[test]
    fn test_rank_is_descending_and_stable() {
        let rules = GameRules::default();
        let mut first = test_submission("First");
        let mut second = test_submission("Second");
        let mut third = test_submission("Third");

        let high = ScoreSheet::new(20, 25, 0, 10, "").unwrap();
        let tied = ScoreSheet::new(10, 10, 0, 5, "").unwrap();
        first.apply_scores(tied.clone(), "t", Timestamp::from_unix_millis(0), &rules);
        second.apply_scores(high, "t", Timestamp::from_unix_millis(0), &rules);
        third.apply_scores(tied, "t", Timestamp::from_unix_millis(0), &rules);

        let mut all = vec![first, second, third];
        rank_submissions(&mut all, &rules);

        assert_eq!(all[0].team_name(), "Second");
        // Tied submissions keep arrival order.
        assert_eq!(all[1].team_name(), "First");
        assert_eq!(all[2].team_name(), "Third");
    }

    #[test]
    fn test_round_trips_through_json() {
        let rules = GameRules::default();
        let mut submission = test_submission("Wire");
        let sheet = ScoreSheet::new(5, 5, 1, 5, "notes").unwrap();
        submission.apply_scores(sheet, "admin", Timestamp::from_unix_millis(0), &rules);

        let json = serde_json::to_string(&submission).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, submission);
    }
}
