//! Units of measure

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Closed set of measuring units, compared by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Unit {
    Grams,
    Kilograms,
    Pounds,
    Milliliters,
    Liters,
    Cups,
    Pieces,
}

impl Unit {
    /// Every unit, in declaration order
    pub const ALL: [Unit; 7] = [
        Unit::Grams,
        Unit::Kilograms,
        Unit::Pounds,
        Unit::Milliliters,
        Unit::Liters,
        Unit::Cups,
        Unit::Pieces,
    ];

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Grams => "grams",
            Unit::Kilograms => "kg",
            Unit::Pounds => "lbs",
            Unit::Milliliters => "ml",
            Unit::Liters => "l",
            Unit::Cups => "cups",
            Unit::Pieces => "pieces",
        }
    }

    /// Parse a unit from its name, ignoring case
    pub fn parse(name: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownUnit {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Unit> for &'static str {
    fn from(unit: Unit) -> Self {
        unit.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name_roundtrips() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.name()).unwrap(), unit);
            assert_eq!(Unit::parse(&unit.name().to_uppercase()).unwrap(), unit);
        }
    }

    #[test]
    fn test_parse_mixed_case() {
        assert_eq!(Unit::parse("Kg").unwrap(), Unit::Kilograms);
        assert_eq!("CUPS".parse::<Unit>().unwrap(), Unit::Cups);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Unit::parse("ounces").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownUnit {
                name: "ounces".to_string()
            }
        );
        assert!(Unit::parse("").is_err());
        assert!(Unit::parse(" grams").is_err());
    }

    #[test]
    fn test_serde_uses_name() {
        assert_eq!(serde_json::to_string(&Unit::Liters).unwrap(), "\"l\"");
        let unit: Unit = serde_json::from_str("\"LBS\"").unwrap();
        assert_eq!(unit, Unit::Pounds);
        assert!(serde_json::from_str::<Unit>("\"stone\"").is_err());
    }
}
