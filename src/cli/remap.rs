//! CLI dispatch for the `tfg remap` command.
//!
//! Rewrites a metadata file through the configured rename tables and
//! writes the result to a file or stdout.

use std::path::Path;
use std::process::ExitCode;

use crate::config::load_rules;
use crate::metadata::{load_metadata, save_metadata};
use crate::remap::remap_metadata;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the remap command.
pub fn run_remap(metadata_path: &Path, rules_path: &Path, output: Option<&Path>) -> ExitCode {
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

    let rules = match load_rules(rules_path) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error: cannot read rules '{}': {}", rules_path.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let remapped = remap_metadata(&characters, &rules.rename);

    match output {
        Some(path) => {
            if let Err(e) = save_metadata(&remapped, path) {
                eprintln!("Error: failed to write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Wrote remapped metadata to {}", path.display());
        }
        None => {
            let json = match serde_json::to_string_pretty(&remapped) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error: failed to serialize metadata: {}", e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            println!("{}", json);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
