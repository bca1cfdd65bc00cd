//! Traitforge - Command-line tool for assembling character art from trait metadata

use std::process::ExitCode;

use traitforge::cli;

fn main() -> ExitCode {
    cli::run()
}
