//! Item slot dump parsing.
//!
//! The randomizer dump is a YAML document with a top-level `Slots` sequence.
//! Optional text fields are written out as a long run of `a` characters when
//! they have no value; those are mapped to `None` while deserializing so the
//! rest of the crate never has to compare against the placeholder.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use thiserror::Error;

/// Placeholder the dump uses in place of an absent string field
pub const ABSENT_SENTINEL: &str = "aaaaaaaaaaaaaaaaa";

/// Area name used for slots the dump could not place
pub const UNKNOWN_AREA: &str = "unknown";

/// Errors from loading a slot dump
#[derive(Debug, Error)]
pub enum SlotsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// A single item placement slot
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Slot {
    /// Area the slot belongs to (may be `unknown`)
    #[serde(default = "unknown_area")]
    pub area: String,

    /// Unique slot identifier
    #[serde(default, deserialize_with = "scalar_text")]
    pub key: String,

    /// One line per item placed at this slot
    #[serde(default)]
    pub debug_text: Vec<String>,

    /// Space separated tag tokens
    #[serde(default, deserialize_with = "optional_text")]
    pub tags: Option<String>,

    /// Free-form location description
    #[serde(default, deserialize_with = "optional_text")]
    pub text: Option<String>,

    /// Quest requirement expression
    #[serde(default, deserialize_with = "optional_text")]
    pub quest_reqs: Option<String>,
}

impl Slot {
    /// Tag tokens declared on the slot, in order
    pub fn tag_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags.as_deref().unwrap_or_default().split_whitespace()
    }

    /// Whether the slot is in the catch-all area
    pub fn is_unknown_area(&self) -> bool {
        self.area == UNKNOWN_AREA
    }
}

fn unknown_area() -> String {
    UNKNOWN_AREA.to_string()
}

/// Keys are plain lot ids in some dumps, so accept any scalar
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a scalar slot key, found {:?}",
            other
        ))),
    }
}

/// Map null, empty and placeholder strings to `None`
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty() && s != ABSENT_SENTINEL))
}

/// The whole slot dump
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SlotsFile {
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl SlotsFile {
    /// Parse a slot dump from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, SlotsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a slot dump from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SlotsError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| SlotsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }
}
