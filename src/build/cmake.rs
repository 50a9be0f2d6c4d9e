//! CMake configuration and execution
//!
//! Handles invoking CMake for the configure and build steps.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::error::PsbuildError;

/// CMake build type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

/// CMake invocation builder
#[derive(Debug, Default)]
pub struct CMakeConfig {
    /// Source directory (where CMakeLists.txt is located)
    source_dir: PathBuf,
    /// Build directory
    build_dir: PathBuf,
    /// Build type
    build_type: BuildType,
    /// Generator (e.g., "Ninja", "Visual Studio 17 2022")
    generator: Option<String>,
    /// CMake variables (-D options)
    definitions: Vec<(String, String)>,
    /// Verbose output
    verbose: bool,
}

impl CMakeConfig {
    /// Create a new CMake configuration
    pub fn new(source_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            source_dir,
            build_dir,
            ..Default::default()
        }
    }

    /// Set the build type
    pub fn build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Set the generator
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Set a CMake variable
    pub fn define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.definitions.push((name.into(), value.into()));
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Find the CMake executable on PATH
    fn find_cmake() -> Result<PathBuf> {
        which::which("cmake").map_err(|_| {
            PsbuildError::missing_tool(
                "cmake",
                "install CMake and make sure it is on PATH",
            )
            .into()
        })
    }

    /// Arguments for the configure step, in invocation order
    pub fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            self.source_dir.display().to_string(),
            "-B".to_string(),
            self.build_dir.display().to_string(),
        ];

        if let Some(generator) = &self.generator {
            args.push("-G".to_string());
            args.push(generator.clone());
        }

        args.push(format!("-DCMAKE_BUILD_TYPE={}", self.build_type));

        for (name, value) in &self.definitions {
            args.push(format!("-D{}={}", name, value));
        }

        args
    }

    /// Run the CMake configure step
    pub fn configure(&self) -> Result<()> {
        let cmake = Self::find_cmake()?;

        std::fs::create_dir_all(&self.build_dir)
            .context("Failed to create CMake build directory")?;

        let mut cmd = Command::new(&cmake);
        cmd.args(self.configure_args());

        if self.verbose {
            eprintln!("Running: {:?}", cmd);
        }

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .context("Failed to run CMake configure")?;

        if !status.success() {
            return Err(PsbuildError::CmakeStepFailed {
                step: "configure",
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }

    /// Run the CMake build step
    pub fn build(&self) -> Result<()> {
        let cmake = Self::find_cmake()?;

        let mut cmd = Command::new(&cmake);
        cmd.arg("--build").arg(&self.build_dir);

        if self.verbose {
            eprintln!("Running: {:?}", cmd);
        }

        let status = cmd
            .stdin(Stdio::null())
            .status()
            .context("Failed to run CMake build")?;

        if !status.success() {
            return Err(PsbuildError::CmakeStepFailed {
                step: "build",
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}
