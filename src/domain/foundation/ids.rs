//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{House, Timestamp, ValidationError};

/// Unique identifier for an active team.
///
/// Derived from house + sanitized team name + creation time in milliseconds,
/// e.g. `lynx-rover-rats-1712345678901`. Human-legible and collision-resistant
/// across concurrent logins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Derives a team id from house, team name, and creation time.
    pub fn derive(house: House, team_name: &str, at: Timestamp) -> Self {
        let sanitized: String = team_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        Self(format!(
            "{}-{}-{}",
            house.as_str().to_lowercase(),
            sanitized,
            at.as_unix_millis()
        ))
    }

    /// Wraps an id read back from persistence.
    pub fn from_string(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("team_id"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Unique identifier for a submission document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Creates a new random SubmissionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SubmissionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_derivation_sanitizes_name() {
        let at = Timestamp::from_unix_millis(1712345678901);
        let id = TeamId::derive(House::Lynx, "Rover Rats!", at);
        assert_eq!(id.as_str(), "lynx-rover-rats--1712345678901");
    }

    #[test]
    fn test_team_id_derivation_lowercases_house() {
        let at = Timestamp::from_unix_millis(42);
        let id = TeamId::derive(House::Panther, "abc", at);
        assert!(id.as_str().starts_with("panther-abc-"));
    }

    #[test]
    fn test_team_id_rejects_empty() {
        assert!(TeamId::from_string("  ").is_err());
    }

    #[test]
    fn test_submission_id_round_trips_via_string() {
        let id = SubmissionId::new();
        let parsed: SubmissionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
