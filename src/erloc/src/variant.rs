//! Conversion variants

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which set of conversion rules to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// First-generation rules: last segment quantity scan, plain location lines
    Basic,
    /// Area codes, commented lines, bell bearing and `norandom` filtering
    #[default]
    Refined,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Basic, Variant::Refined];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Refined => "refined",
        }
    }

    pub fn is_refined(&self) -> bool {
        matches!(self, Variant::Refined)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown variant '{0}' (expected 'basic' or 'refined')")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseVariantError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant() {
        assert_eq!("basic".parse::<Variant>().unwrap(), Variant::Basic);
        assert_eq!(" Refined ".parse::<Variant>().unwrap(), Variant::Refined);
        assert!("fancy".parse::<Variant>().is_err());
    }

    #[test]
    fn test_default_is_refined() {
        assert!(Variant::default().is_refined());
    }
}
