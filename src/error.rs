//! Error types with actionable hints

use thiserror::Error;

/// Errors surfaced to the user by psbuild
#[derive(Error, Debug)]
pub enum PsbuildError {
    /// Tool/executable not found on PATH
    #[error("Missing tool: {tool}\n  hint: {hint}")]
    MissingTool { tool: String, hint: String },

    /// A CMake step exited with a non-zero status
    #[error("CMake {step} failed with exit code {code:?}")]
    CmakeStepFailed { step: &'static str, code: Option<i32> },
}

impl PsbuildError {
    pub fn missing_tool(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            hint: hint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_message_carries_hint() {
        let err = PsbuildError::missing_tool("cmake", "install it from cmake.org");
        let rendered = err.to_string();
        assert!(rendered.contains("Missing tool: cmake"));
        assert!(rendered.contains("cmake.org"));
    }

    #[test]
    fn test_step_failure_message() {
        let err = PsbuildError::CmakeStepFailed {
            step: "configure",
            code: Some(2),
        };
        assert!(err.to_string().contains("configure"));
        assert!(err.to_string().contains("2"));
    }
}
