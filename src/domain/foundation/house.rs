//! House value object - the fixed set of team cohorts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the four fixed team groupings used for filtering and leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Lynx,
    Jaguar,
    Cougar,
    Panther,
}

impl House {
    /// All houses, in display order.
    pub const ALL: [House; 4] = [House::Lynx, House::Jaguar, House::Cougar, House::Panther];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            House::Lynx => "Lynx",
            House::Jaguar => "Jaguar",
            House::Cougar => "Cougar",
            House::Panther => "Panther",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for House {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lynx" => Ok(House::Lynx),
            "jaguar" => Ok(House::Jaguar),
            "cougar" => Ok(House::Cougar),
            "panther" => Ok(House::Panther),
            other => Err(ValidationError::invalid_format(
                "house",
                format!("unknown house '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_parses_case_insensitively() {
        assert_eq!("lynx".parse::<House>().unwrap(), House::Lynx);
        assert_eq!("JAGUAR".parse::<House>().unwrap(), House::Jaguar);
        assert_eq!("Panther".parse::<House>().unwrap(), House::Panther);
    }

    #[test]
    fn test_unknown_house_is_rejected() {
        assert!("tiger".parse::<House>().is_err());
    }

    #[test]
    fn test_display_matches_all_order() {
        let names: Vec<&str> = House::ALL.iter().map(|h| h.as_str()).collect();
        assert_eq!(names, vec!["Lynx", "Jaguar", "Cougar", "Panther"]);
    }
}
