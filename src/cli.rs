//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::build::{run_build, BuildContext, Platform};
use crate::build::cmake::BuildType;
use crate::clean::clean_build_dir;
use crate::utils::paths::{find_project_root, get_build_dir};
use crate::utils::terminal::print_warning;

/// psbuild - Plague: Survivors build tool
///
/// Configures and builds the game with CMake for the given platform.
#[derive(Parser, Debug)]
#[command(name = "psbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Platform to build for (win32, mac)
    pub platform: String,

    /// Export compile commands for editor tooling
    #[arg(long)]
    pub vim: bool,

    /// Build the Release configuration instead of Debug
    #[arg(long)]
    pub rel: bool,

    /// Remove the build directory before configuring
    #[arg(long)]
    pub clean: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Execute the build as described by the parsed flags
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let project_root = find_project_root()?;
        let build_dir = get_build_dir(&project_root);

        // Cleaning happens before the platform check, so `--clean` works
        // even with a platform we do not build for.
        if self.clean {
            clean_build_dir(&build_dir)?;
        }

        let Some(platform) = Platform::from_arg(&self.platform) else {
            // Unknown platforms are a no-op with exit code 0, matching the
            // behavior the project has always had.
            print_warning(&format!(
                "unknown platform '{}', nothing to build (expected win32 or mac)",
                self.platform
            ));
            return Ok(());
        };

        let build_type = if self.rel {
            BuildType::Release
        } else {
            BuildType::Debug
        };

        let ctx = BuildContext {
            project_root,
            build_dir,
            build_type,
            export_compile_commands: self.vim,
            verbose: self.verbose,
        };

        run_build(platform, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flag_defaults() {
        let cli = Cli::parse_from(["psbuild", "win32"]);
        assert_eq!(cli.platform, "win32");
        assert!(!cli.vim);
        assert!(!cli.rel);
        assert!(!cli.clean);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from(["psbuild", "mac", "--vim", "--rel", "--clean"]);
        assert_eq!(cli.platform, "mac");
        assert!(cli.vim);
        assert!(cli.rel);
        assert!(cli.clean);
    }

    #[test]
    fn test_platform_is_required() {
        assert!(Cli::try_parse_from(["psbuild"]).is_err());
    }
}
