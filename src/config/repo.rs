//! Repository configuration and naming rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{MantleError, Result};

/// Platforms a manifest list is allowed to reference.
pub const ALLOWED_PLATFORMS: [&str; 5] = [
    "linux/amd64",
    "linux/arm64",
    "linux/arm64/v8",
    "linux/arm",
    "linux/arm/v7",
];

/// Regular expression to validate docker tags.
///
/// refs:
///  - https://docs.docker.com/engine/reference/commandline/tag/#extended-description
///  - https://github.com/distribution/distribution/blob/01f589cf8726565aa3c5c053be12873bafedbedc/reference/regexp.go#L41
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z_][0-9A-Za-z_.-]{0,127}$").expect("TAG_REGEX must compile")
});

/// Check a single tag against the registry tag grammar.
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_REGEX.is_match(tag)
}

/// Repository settings for the manifest list.
#[derive(Debug, Clone, Default)]
pub struct Repo {
    /// Name of the repository for the image.
    pub name: String,

    /// Tags of the image for the repository.
    pub tags: Vec<String>,

    /// Platforms which should be included in the manifest list.
    pub platforms: Vec<String>,

    /// Template used to render each component image.
    pub component_template: String,
}

impl Repo {
    /// Verify the repository configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(MantleError::ConfigValidation {
                message: "no repo name provided".into(),
            });
        }

        if self.tags.is_empty() {
            return Err(MantleError::ConfigValidation {
                message: "no tags provided".into(),
            });
        }
        for tag in &self.tags {
            if !is_valid_tag(tag) {
                return Err(MantleError::TagNotAllowed { tag: tag.clone() });
            }
        }

        if self.platforms.is_empty() {
            return Err(MantleError::ConfigValidation {
                message: "no platforms provided".into(),
            });
        }
        for platform in &self.platforms {
            if !ALLOWED_PLATFORMS.contains(&platform.as_str()) {
                return Err(MantleError::ConfigValidation {
                    message: format!("unsupported platform {} requested", platform),
                });
            }
        }

        Ok(())
    }
}
