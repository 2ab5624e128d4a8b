//! Shared error type for application command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{SubmissionId, TeamId, ValidationError};
use crate::domain::team::TeamError;
use crate::ports::StorageError;

/// Errors surfaced by application handlers.
///
/// Not-found on a team load is a normal "new session" condition for clients;
/// it is still an error at this layer so the HTTP adapter can answer 404.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Submission not found: {0}")]
    SubmissionNotFound(SubmissionId),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
