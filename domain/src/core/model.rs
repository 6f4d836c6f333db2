//! ModelTier value object representing a generation quality tier

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generation quality tier (Value Object)
///
/// The tribunal selects a tier per call rather than a concrete model:
/// the Scholar and Auditor use [`ModelTier::Pro`] for accuracy, while the
/// Sceptic uses [`ModelTier::Flash`] since its critique only needs breadth,
/// not precision. The mapping from tier to a concrete model identifier is
/// an infrastructure concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Higher quality, slower, more expensive
    Pro,
    /// Faster, cheaper
    Flash,
}

impl ModelTier {
    /// Get the string identifier for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Pro => "pro",
            ModelTier::Flash => "flash",
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pro" => Ok(ModelTier::Pro),
            "flash" => Ok(ModelTier::Flash),
            other => Err(format!("Unknown model tier: {}", other)),
        }
    }
}

impl Serialize for ModelTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_roundtrip() {
        for tier in [ModelTier::Pro, ModelTier::Flash] {
            let s = tier.to_string();
            let parsed: ModelTier = s.parse().unwrap();
            assert_eq!(tier, parsed);
        }
    }

    #[test]
    fn test_unknown_tier_is_error() {
        assert!("turbo".parse::<ModelTier>().is_err());
    }
}
