//! Trait ordering
//!
//! Sorts a character's trait list into compositing order using per-type
//! priorities plus exact-match exceptions for specific values. The sort
//! is stable, so traits with equal priority keep their input order.

use crate::config::SpecialRule;
use crate::models::Trait;
use std::collections::HashMap;

/// Sort traits by priority, lowest first.
///
/// Priority resolution per trait:
/// 1. a special rule matching the exact `(trait_type, value)` pair
/// 2. the order rule for the trait's type
/// 3. fallback: `order_rules.len()`, which sorts after every ranked type
///
/// When the same `(trait_type, value)` pair appears in more than one
/// special rule, the last one wins.
pub fn order_traits(
    traits: &[Trait],
    order_rules: &HashMap<String, i64>,
    special_rules: &[SpecialRule],
) -> Vec<Trait> {
    let special_lookup: HashMap<(&str, &str), i64> = special_rules
        .iter()
        .map(|rule| ((rule.trait_type.as_str(), rule.value.as_str()), rule.priority))
        .collect();
    let fallback = order_rules.len() as i64;

    let mut ordered = traits.to_vec();
    ordered.sort_by_key(|t| {
        special_lookup
            .get(&(t.trait_type.as_str(), t.value.as_str()))
            .copied()
            .or_else(|| order_rules.get(&t.trait_type).copied())
            .unwrap_or(fallback)
    });
    ordered
}
