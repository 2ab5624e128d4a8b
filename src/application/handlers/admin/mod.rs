//! Admin command and query handlers: judging and roster management.

mod create_submission;
mod delete_submission;
mod list_submissions;
mod list_teams;
mod score_submission;

pub use create_submission::{CreateSubmissionCommand, CreateSubmissionHandler};
pub use delete_submission::{DeleteSubmissionCommand, DeleteSubmissionHandler};
pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
pub use list_teams::{ListTeamsHandler, ListTeamsQuery};
pub use score_submission::{ScoreSubmissionCommand, ScoreSubmissionHandler};
