//! CLI dispatch for the `tfg assemble` command.
//!
//! Drives the full pipeline: metadata in, optional remap, trait
//! ordering, per-character assembly.

use std::path::Path;
use std::process::ExitCode;

use crate::assembler::assemble_character;
use crate::config::{load_rules, RuleSet};
use crate::metadata::load_metadata;
use crate::ordering::order_traits;
use crate::remap::remap_metadata;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the assemble command.
pub fn run_assemble(
    metadata_path: &Path,
    assets: &Path,
    rules_path: Option<&Path>,
    remap: bool,
) -> ExitCode {
    let characters = match load_metadata(metadata_path) {
        Ok(map) => map,
        Err(e) => {
            eprintln!(
                "Error: cannot read metadata '{}': {}",
                metadata_path.display(),
                e
            );
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let rules = match rules_path {
        Some(path) => match load_rules(path) {
            Ok(rules) => rules,
            Err(e) => {
                eprintln!("Error: cannot read rules '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => {
            eprintln!("Warning: no rules file given, traits keep their metadata order");
            RuleSet::default()
        }
    };

    let characters = if remap {
        remap_metadata(&characters, &rules.rename)
    } else {
        characters
    };

    let total = characters.len();
    let mut failures = 0usize;

    // a failed character never aborts the rest of the batch
    for (id, traits) in &characters {
        let ordered = order_traits(traits, &rules.order, &rules.special);
        match assemble_character(assets, id, &ordered) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    eprintln!("Warning: character '{}': {}", id, warning.message);
                }
                println!("{} -> {}", id, outcome.path.display());
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("Error: {} of {} characters failed", failures, total);
        return ExitCode::from(EXIT_ERROR);
    }

    println!(
        "Assembled {} character{}",
        total,
        if total == 1 { "" } else { "s" }
    );
    ExitCode::from(EXIT_SUCCESS)
}
