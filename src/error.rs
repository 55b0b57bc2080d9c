//! Error types for Mantle operations.
//!
//! This module defines [`MantleError`], the primary error type used throughout
//! the plugin, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MantleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MantleError::Other`) for unexpected errors
//! - Errors are propagated unwrapped to the top level, logged once, and turn
//!   into a non-zero exit status

use thiserror::Error;

/// Core error type for Mantle operations.
#[derive(Debug, Error)]
pub enum MantleError {
    /// Invalid registry or repository configuration.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A generated manifest spec violates a structural invariant.
    #[error("Invalid manifest spec: {message}")]
    SpecValidation { message: String },

    /// An image reference that is not in `name:tag` form.
    #[error("'{image}' not in image:tag format")]
    MalformedImageRef { image: String },

    /// A tag that violates the registry tag grammar.
    #[error("tag '{tag}' not allowed - see https://docs.docker.com/engine/reference/commandline/tag/#extended-description")]
    TagNotAllowed { tag: String },

    /// A platform string with fewer than two `/`-separated segments.
    #[error("malformed platform '{platform}'")]
    MalformedPlatform { platform: String },

    /// Component template failed to parse or render.
    #[error("Template error: {message}")]
    Template { message: String },

    /// External command failed to launch or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Manifest spec serialization failure.
    #[error("Failed to serialize manifest spec: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Mantle operations.
pub type Result<T> = std::result::Result<T, MantleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation_displays_message() {
        let err = MantleError::ConfigValidation {
            message: "no repo name provided".into(),
        };
        assert!(err.to_string().contains("no repo name provided"));
    }

    #[test]
    fn spec_validation_displays_message() {
        let err = MantleError::SpecValidation {
            message: "no component images provided".into(),
        };
        assert!(err.to_string().contains("no component images provided"));
    }

    #[test]
    fn malformed_image_ref_displays_image() {
        let err = MantleError::MalformedImageRef {
            image: "no-tag-here".into(),
        };
        assert!(err.to_string().contains("no-tag-here"));
        assert!(err.to_string().contains("image:tag"));
    }

    #[test]
    fn tag_not_allowed_displays_tag_and_reference() {
        let err = MantleError::TagNotAllowed {
            tag: "invalid|tag".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid|tag"));
        assert!(msg.contains("docs.docker.com"));
    }

    #[test]
    fn malformed_platform_displays_platform() {
        let err = MantleError::MalformedPlatform {
            platform: "linux".into(),
        };
        assert!(err.to_string().contains("linux"));
    }

    #[test]
    fn template_error_displays_message() {
        let err = MantleError::Template {
            message: "unclosed '{{'".into(),
        };
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = MantleError::CommandFailed {
            command: "manifest-tool push from-spec /root/specs/spec_0.yml".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("manifest-tool push"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MantleError = io_err.into();
        assert!(matches!(err, MantleError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(MantleError::ConfigValidation {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
