//! Platform-specific build implementations
//!
//! Each platform has its own builder that implements the `PlatformBuilder`
//! trait. A builder picks the CMake generator and configuration flags for its
//! platform, runs the configure step, then the build step.

pub mod mac;
pub mod win32;

use anyhow::Result;

use super::{BuildContext, Platform};

/// A platform-specific build pipeline
pub trait PlatformBuilder {
    /// Platform name for status output
    fn name(&self) -> &str;

    /// Configure and build the game for this platform
    fn build(&self, ctx: &BuildContext) -> Result<()>;
}

/// Get the builder for the target platform
pub fn get_builder(platform: Platform) -> Box<dyn PlatformBuilder> {
    match platform {
        Platform::Win32 => Box::new(win32::Win32Builder::new()),
        Platform::Mac => Box::new(mac::MacBuilder::new()),
    }
}
