//! macOS platform builder
//!
//! Builds through Ninja and optionally exports compile_commands.json,
//! relocating it to the project root where editor tooling looks for it.

use std::path::Path;

use anyhow::{Context, Result};

use crate::build::cmake::CMakeConfig;
use crate::build::BuildContext;
use crate::utils::terminal::print_info;

use super::PlatformBuilder;

/// Generator used for macOS builds
pub const GENERATOR: &str = "Ninja";

/// File name of the compile-commands artifact CMake emits
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// macOS platform builder
pub struct MacBuilder;

impl MacBuilder {
    pub fn new() -> Self {
        Self
    }

    /// CMake configuration for a macOS build
    fn cmake_config(&self, ctx: &BuildContext) -> CMakeConfig {
        let export = if ctx.export_compile_commands {
            "True"
        } else {
            "False"
        };
        CMakeConfig::new(ctx.project_root.clone(), ctx.build_dir.clone())
            .generator(GENERATOR)
            .build_type(ctx.build_type)
            .define("CMAKE_EXPORT_COMPILE_COMMANDS", export)
            .verbose(ctx.verbose)
    }
}

impl PlatformBuilder for MacBuilder {
    fn name(&self) -> &str {
        "mac"
    }

    fn build(&self, ctx: &BuildContext) -> Result<()> {
        let cmake = self.cmake_config(ctx);
        cmake.configure()?;

        // The artifact lands in the build directory; editors expect it at
        // the project root. Moved right after configure, before the build
        // step, same order the project has always used.
        if ctx.export_compile_commands {
            relocate_compile_commands(&ctx.build_dir, &ctx.project_root)?;
            if ctx.verbose {
                print_info(&format!("moved {} to project root", COMPILE_COMMANDS));
            }
        }

        cmake.build()
    }
}

/// Move compile_commands.json from the build directory to the project root
pub fn relocate_compile_commands(build_dir: &Path, project_root: &Path) -> Result<()> {
    let src = build_dir.join(COMPILE_COMMANDS);
    let dst = project_root.join(COMPILE_COMMANDS);
    std::fs::rename(&src, &dst).with_context(|| {
        format!("Failed to move {} to {}", src.display(), dst.display())
    })?;
    Ok(())
}
