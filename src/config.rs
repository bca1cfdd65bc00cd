//! Rule set configuration (`rules.toml`)
//!
//! Ordering priorities, special-case exceptions, and rename tables are
//! external configuration: loaded once at startup and passed by
//! reference into the pure core functions, never baked into them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse rules file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// An exception to default trait-type ordering for one specific value.
///
/// Matches on the exact `(trait_type, value)` pair; values are never
/// treated as substrings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRule {
    pub trait_type: String,
    pub value: String,
    pub priority: i64,
}

/// Vocabulary rename tables.
///
/// `types` renames trait types; `values` renames trait values and is
/// keyed by the ORIGINAL trait type, then the ORIGINAL value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenameTables {
    #[serde(default)]
    pub types: HashMap<String, String>,
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, String>>,
}

/// The full rule set consumed by the pipeline.
///
/// Every section is optional; a missing section means pass-through
/// behavior (fallback ordering, no renames).
///
/// ```toml
/// [order]
/// background = 0
/// mouth = 1
///
/// [[special]]
/// trait_type = "head"
/// value = "halo"
/// priority = 99
///
/// [rename.types]
/// face = "body"
///
/// [rename.values.face]
/// dark = "brown"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// trait_type -> priority (lower sorts first)
    #[serde(default)]
    pub order: HashMap<String, i64>,
    /// Exact-match ordering exceptions
    #[serde(default)]
    pub special: Vec<SpecialRule>,
    /// Vocabulary renames
    #[serde(default)]
    pub rename: RenameTables,
}

/// Load a rule set from a TOML file.
pub fn load_rules(path: &Path) -> Result<RuleSet, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
