//! Windows platform builder
//!
//! Generates Visual Studio project files and builds through them.

use anyhow::Result;

use crate::build::cmake::CMakeConfig;
use crate::build::BuildContext;

use super::PlatformBuilder;

/// Visual Studio generator used for Windows builds
pub const GENERATOR: &str = "Visual Studio 17 2022";

/// Windows platform builder
pub struct Win32Builder;

impl Win32Builder {
    pub fn new() -> Self {
        Self
    }

    /// CMake configuration for a Windows build
    fn cmake_config(&self, ctx: &BuildContext) -> CMakeConfig {
        CMakeConfig::new(ctx.project_root.clone(), ctx.build_dir.clone())
            .generator(GENERATOR)
            .build_type(ctx.build_type)
            .verbose(ctx.verbose)
    }
}

impl PlatformBuilder for Win32Builder {
    fn name(&self) -> &str {
        "win32"
    }

    fn build(&self, ctx: &BuildContext) -> Result<()> {
        let cmake = self.cmake_config(ctx);
        cmake.configure()?;
        cmake.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::cmake::BuildType;
    use std::path::PathBuf;

    fn ctx(build_type: BuildType) -> BuildContext {
        BuildContext {
            project_root: PathBuf::from("/proj"),
            build_dir: PathBuf::from("/proj/build"),
            build_type,
            export_compile_commands: false,
            verbose: false,
        }
    }

    #[test]
    fn test_uses_visual_studio_generator() {
        let args = Win32Builder::new()
            .cmake_config(&ctx(BuildType::Debug))
            .configure_args();
        let pos = args.iter().position(|a| a == "-G").unwrap();
        assert_eq!(args[pos + 1], "Visual Studio 17 2022");
    }

    #[test]
    fn test_debug_build_type() {
        let args = Win32Builder::new()
            .cmake_config(&ctx(BuildType::Debug))
            .configure_args();
        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Debug".to_string()));
    }

    #[test]
    fn test_release_build_type() {
        let args = Win32Builder::new()
            .cmake_config(&ctx(BuildType::Release))
            .configure_args();
        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
    }

    #[test]
    fn test_no_compile_commands_flag() {
        // The Visual Studio generator cannot emit compile_commands.json, so
        // the flag is never passed on win32.
        let args = Win32Builder::new()
            .cmake_config(&ctx(BuildType::Debug))
            .configure_args();
        assert!(!args.iter().any(|a| a.contains("CMAKE_EXPORT_COMPILE_COMMANDS")));
    }
}
