//! Build orchestration
//!
//! Dispatches to a platform-specific builder which configures and builds the
//! game with CMake.
//!
//! ## Modules
//!
//! - `platforms` - Platform-specific builders (win32, mac)
//! - `cmake` - CMake configuration and execution

pub mod cmake;
pub mod platforms;

use std::path::PathBuf;

use anyhow::Result;

use crate::utils::terminal::print_success;

use self::cmake::BuildType;
use self::platforms::get_builder;

/// Platforms the game builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows, Visual Studio generator
    Win32,
    /// macOS, Ninja generator
    Mac,
}

impl Platform {
    /// Parse the platform argument. Returns `None` for anything we do not
    /// build for.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "win32" => Some(Platform::Win32),
            "mac" => Some(Platform::Mac),
            _ => None,
        }
    }
}

/// Build context shared by all platform builders
#[derive(Debug)]
pub struct BuildContext {
    /// Project root directory (where CMakeLists.txt is located)
    pub project_root: PathBuf,
    /// CMake build directory (project_root/build)
    pub build_dir: PathBuf,
    /// Debug or Release
    pub build_type: BuildType,
    /// Emit compile_commands.json for editor tooling
    pub export_compile_commands: bool,
    /// Verbose output
    pub verbose: bool,
}

/// Configure and build for the given platform
pub fn run_build(platform: Platform, ctx: &BuildContext) -> Result<()> {
    let builder = get_builder(platform);
    builder.build(ctx)?;
    print_success(&format!(
        "{} {} build finished",
        builder.name(),
        ctx.build_type
    ));
    Ok(())
}
