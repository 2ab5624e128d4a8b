//! Storage adapters: local JSON files, in-memory doubles, and the
//! remote-with-fallback composite.

mod fallback;
pub mod in_memory;
mod local_submission_repository;
mod local_team_repository;

pub use fallback::{FallbackSubmissionRepository, FallbackTeamRepository};
pub use in_memory::{InMemorySubmissionRepository, InMemoryTeamRepository};
pub use local_submission_repository::LocalSubmissionRepository;
pub use local_team_repository::LocalTeamRepository;
