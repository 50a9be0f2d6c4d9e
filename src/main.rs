//! psbuild - Build orchestration CLI for Plague: Survivors
//!
//! A thin wrapper around CMake that picks the generator and configuration
//! flags for the target platform, optionally cleaning the build directory
//! and exporting compile commands for editor tooling.
//!
//! ## Flow
//!
//! ```text
//! CLI flags → optional clean → CMake configure → CMake build
//! ```

mod build;
mod clean;
mod cli;
mod error;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
