//! Manifest spec data model, validation, and rendering.
//!
//! [`ManifestSpec`] mirrors the structure of the manifest-tool YAML spec
//! file; field declaration order matches the serialized field order.

use serde::Serialize;

use crate::config::repo::is_valid_tag;
use crate::error::{MantleError, Result};

/// Target platform for a component image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platform {
    /// Operating system, e.g. `linux`.
    pub os: String,

    /// CPU architecture, e.g. `amd64`.
    pub architecture: String,

    /// Architecture variant, e.g. `v8`. Empty when the platform has none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub variant: String,
}

impl Platform {
    /// Parse an `os/arch[/variant]` platform string.
    ///
    /// Segments past the third are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MantleError::MalformedPlatform`] for fewer than two
    /// `/`-separated segments.
    pub fn parse(platform: &str) -> Result<Self> {
        let segments: Vec<&str> = platform.split('/').collect();
        if segments.len() < 2 {
            return Err(MantleError::MalformedPlatform {
                platform: platform.to_string(),
            });
        }
        Ok(Self {
            os: segments[0].to_string(),
            architecture: segments[1].to_string(),
            variant: segments.get(2).unwrap_or(&"").to_string(),
        })
    }
}

/// One per-platform image referenced by the manifest list.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestComponent {
    /// Name of the component image to be referenced by the index.
    pub image: String,

    /// The platform specification for the component image.
    pub platform: Platform,
}

/// The manifest-tool spec for a single manifest list/image index.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestSpec {
    /// Name of the image index including tag.
    pub image: String,

    /// Component images included in the index.
    pub manifests: Vec<ManifestComponent>,
}

impl ManifestSpec {
    /// Verify the spec only references well-formed image names.
    pub fn validate(&self) -> Result<()> {
        if self.image.is_empty() {
            return Err(MantleError::SpecValidation {
                message: "no top-level image provided".into(),
            });
        }
        validate_image_tag(&self.image)?;

        if self.manifests.is_empty() {
            return Err(MantleError::SpecValidation {
                message: "no component images provided".into(),
            });
        }
        for component in &self.manifests {
            validate_image_tag(&component.image)?;
        }

        Ok(())
    }

    /// Serialize the spec to the YAML format manifest-tool consumes.
    pub fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Check that an image reference is `name:tag` with a valid tag.
fn validate_image_tag(image: &str) -> Result<()> {
    let segments: Vec<&str> = image.split(':').collect();
    if segments.len() != 2 {
        return Err(MantleError::MalformedImageRef {
            image: image.to_string(),
        });
    }
    if !is_valid_tag(segments[1]) {
        return Err(MantleError::TagNotAllowed {
            tag: segments[1].to_string(),
        });
    }
    Ok(())
}
