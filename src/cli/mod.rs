//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod assemble;
mod gif;
mod glitch;
mod remap;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Traitforge - assemble layered character art from trait metadata
#[derive(Parser)]
#[command(name = "tfg")]
#[command(about = "Traitforge - assemble layered character art from trait metadata")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble character images from a metadata file
    Assemble {
        /// Metadata JSON file mapping character ids to trait lists
        metadata: PathBuf,

        /// Asset directory holding the trait image tree
        /// (one subdirectory per trait type)
        assets: PathBuf,

        /// TOML file with ordering priorities and rename tables
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Remap trait names through the rename tables before assembly
        #[arg(long)]
        remap: bool,
    },

    /// Rewrite a metadata file through the rename tables
    Remap {
        /// Metadata JSON file to rewrite
        metadata: PathBuf,

        /// TOML file with the rename tables
        #[arg(short, long)]
        rules: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a looping GIF from still images
    Gif {
        /// Input images in frame order; glob patterns are expanded
        #[arg(required = true)]
        images: Vec<String>,

        /// Output GIF path
        #[arg(short, long)]
        output: PathBuf,

        /// Frame duration in milliseconds
        #[arg(long, default_value = "500")]
        duration: u32,
    },

    /// Generate a glitch-art GIF from a single image
    Glitch {
        /// Source image
        input: PathBuf,

        /// Output GIF path
        #[arg(short, long)]
        output: PathBuf,

        /// Number of frames to render
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
        frames: u32,

        /// Maximum channel displacement in pixels
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
        displacement: u32,

        /// Saturation boost applied on top of the original colors
        #[arg(long, default_value = "0.5")]
        intensity: f32,

        /// Seed for the frame offsets (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            metadata,
            assets,
            rules,
            remap,
        } => assemble::run_assemble(&metadata, &assets, rules.as_deref(), remap),
        Commands::Remap {
            metadata,
            rules,
            output,
        } => remap::run_remap(&metadata, &rules, output.as_deref()),
        Commands::Gif {
            images,
            output,
            duration,
        } => gif::run_gif(&images, &output, duration),
        Commands::Glitch {
            input,
            output,
            frames,
            displacement,
            intensity,
            seed,
        } => glitch::run_glitch(&input, &output, frames, displacement, intensity, seed),
    }
}
