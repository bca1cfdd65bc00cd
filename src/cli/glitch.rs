//! CLI dispatch for the `tfg glitch` command.

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::glitch::glitch_gif;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the glitch command.
pub fn run_glitch(
    input: &Path,
    output: &Path,
    frames: u32,
    displacement: u32,
    intensity: f32,
    seed: Option<u64>,
) -> ExitCode {
    let seed = seed.unwrap_or_else(entropy_seed);

    println!("loading image to glitch from {}", input.display());
    match glitch_gif(input, output, frames, displacement, intensity, seed) {
        Ok(_) => {
            println!("GIF saved to {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Seed from the system clock for when the user doesn't pass one.
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
