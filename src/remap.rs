//! Trait vocabulary remapping
//!
//! Renames trait types and values through the configured rename
//! tables. Value renames are looked up under the ORIGINAL trait type,
//! so renaming a type never changes which value table applies. Traits
//! with no matching entry pass through unchanged.

use crate::config::RenameTables;
use crate::models::{CharacterMap, Trait};

/// Remap a single trait through the rename tables.
pub fn remap_trait(t: &Trait, tables: &RenameTables) -> Trait {
    let value = tables
        .values
        .get(&t.trait_type)
        .and_then(|by_value| by_value.get(&t.value))
        .cloned()
        .unwrap_or_else(|| t.value.clone());
    let trait_type = tables
        .types
        .get(&t.trait_type)
        .cloned()
        .unwrap_or_else(|| t.trait_type.clone());

    Trait { trait_type, value }
}

/// Remap every trait in a character map, preserving character ids and
/// each character's trait order.
pub fn remap_metadata(characters: &CharacterMap, tables: &RenameTables) -> CharacterMap {
    characters
        .iter()
        .map(|(id, traits)| {
            let remapped = traits.iter().map(|t| remap_trait(t, tables)).collect();
            (id.clone(), remapped)
        })
        .collect()
}
