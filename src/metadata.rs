//! Metadata file I/O
//!
//! The metadata file is a JSON object mapping character ids to trait
//! lists: `{"1": [{"trait_type": "background", "value": "blue"}, ...]}`.

use crate::models::CharacterMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Error reading or writing a metadata file.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// File I/O error
    #[error("metadata I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing or serialization error
    #[error("invalid metadata JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a character map from a metadata JSON file.
pub fn load_metadata(path: &Path) -> Result<CharacterMap, MetadataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Write a character map as pretty-printed metadata JSON.
pub fn save_metadata(map: &CharacterMap, path: &Path) -> Result<(), MetadataError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, map)?;
    Ok(())
}
