//! Player attributes and the bounds each one is kept within.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Numeric attributes a scene action may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Health,
    Hunger,
    Thirst,
}

impl Attribute {
    /// Every recognized attribute, in display order.
    pub const ALL: [Attribute; 3] = [Attribute::Health, Attribute::Hunger, Attribute::Thirst];

    /// Name used in content files and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Health => "health",
            Attribute::Hunger => "hunger",
            Attribute::Thirst => "thirst",
        }
    }

    /// Value a fresh player starts with.
    pub fn initial_value(&self) -> i32 {
        match self {
            Attribute::Health => HEALTH_MAX,
            Attribute::Hunger | Attribute::Thirst => 0,
        }
    }

    /// Upper bound, if the attribute has one.
    ///
    /// Hunger and thirst have no cap: content never showed one, so they grow freely.
    pub fn max(&self) -> Option<i32> {
        match self {
            Attribute::Health => Some(HEALTH_MAX),
            Attribute::Hunger | Attribute::Thirst => None,
        }
    }

    /// Bring a raw value back into the attribute's legal range.
    pub fn clamp(&self, value: i32) -> i32 {
        let floored = value.max(0);
        match self.max() {
            Some(max) => floored.min(max),
            None => floored,
        }
    }
}

/// Highest health a player can have.
pub const HEALTH_MAX: i32 = 100;

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any recognized attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute '{0}' (expected one of: health, hunger, thirst)")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "health" => Ok(Attribute::Health),
            "hunger" => Ok(Attribute::Hunger),
            "thirst" => Ok(Attribute::Thirst),
            other => Err(UnknownAttribute(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute_names() {
        assert_eq!("health".parse::<Attribute>(), Ok(Attribute::Health));
        assert_eq!("hunger".parse::<Attribute>(), Ok(Attribute::Hunger));
        assert_eq!("thirst".parse::<Attribute>(), Ok(Attribute::Thirst));
    }

    #[test]
    fn test_parse_unknown_attribute() {
        let err = "mana".parse::<Attribute>().unwrap_err();
        assert_eq!(err, UnknownAttribute("mana".to_string()));
        assert!(err.to_string().contains("mana"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Health".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(Attribute::clamp(&Attribute::Health, 150), 100);
        assert_eq!(Attribute::clamp(&Attribute::Health, -50), 0);
        assert_eq!(Attribute::clamp(&Attribute::Hunger, -1), 0);
        assert_eq!(Attribute::clamp(&Attribute::Thirst, 5000), 5000);
    }

    #[test]
    fn test_initial_values() {
        assert_eq!(Attribute::Health.initial_value(), 100);
        assert_eq!(Attribute::Hunger.initial_value(), 0);
        assert_eq!(Attribute::Thirst.initial_value(), 0);
    }

    #[test]
    fn test_display_matches_name() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.to_string(), attribute.name());
            assert_eq!(attribute.name().parse::<Attribute>(), Ok(attribute));
        }
    }
}
