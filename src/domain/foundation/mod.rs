//! Foundation value objects shared across domain modules.

mod errors;
mod house;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use house::House;
pub use ids::{SubmissionId, TeamId};
pub use timestamp::Timestamp;
