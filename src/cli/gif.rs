//! CLI dispatch for the `tfg gif` command.
//!
//! Expands input arguments (literal paths or glob patterns) and builds
//! a looping GIF from the matched images.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::gif::build_gif;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Expand input arguments into concrete file paths.
///
/// Arguments containing glob metacharacters are expanded through the
/// glob crate (matches come back sorted); everything else passes
/// through as a literal path.
fn expand_inputs(images: &[String]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for arg in images {
        if arg.contains('*') || arg.contains('?') || arg.contains('[') {
            match glob(arg) {
                Ok(matches) => paths.extend(matches.filter_map(Result::ok)),
                Err(e) => eprintln!("Warning: bad pattern '{}': {}", arg, e),
            }
        } else {
            paths.push(PathBuf::from(arg));
        }
    }
    paths
}

/// Execute the gif command.
pub fn run_gif(images: &[String], output: &Path, duration: u32) -> ExitCode {
    let inputs = expand_inputs(images);
    if inputs.is_empty() {
        eprintln!("Error: no input images matched");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    match build_gif(&inputs, output, duration) {
        Ok(count) => {
            println!(
                "Wrote {} frame{} to {}",
                count,
                if count == 1 { "" } else { "s" },
                output.display()
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
