//! Data models for character metadata (traits and character maps)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The distinguished trait type that selects the canvas and base layer.
pub const BACKGROUND_TYPE: &str = "background";

/// A single named visual attribute applied to a character.
///
/// Serializes with the external metadata field names:
/// `{"trait_type": "eyes", "value": "angry"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: String,
}

impl Trait {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self { trait_type: trait_type.into(), value: value.into() }
    }
}

/// Character id -> trait list, as read from the metadata file.
///
/// A BTreeMap keeps batch iteration deterministic across runs.
pub type CharacterMap = BTreeMap<String, Vec<Trait>>;
