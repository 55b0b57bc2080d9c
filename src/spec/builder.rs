//! Manifest spec expansion from plugin configuration.

use tracing::debug;

use crate::config::{Registry, Repo};
use crate::error::{MantleError, Result};
use crate::spec::model::{ManifestComponent, ManifestSpec, Platform};
use crate::spec::template::{ComponentContext, Template};

/// Expand the configured tags and platforms into one spec per tag.
///
/// The component template is parsed once and rendered for every
/// (tag, platform) pair; tag order and platform order are preserved.
/// Side-effect free: no external resource is touched.
pub fn build_specs(registry: &Registry, repo: &Repo) -> Result<Vec<ManifestSpec>> {
    let template = Template::parse(&repo.component_template)?;

    let mut specs = Vec::with_capacity(repo.tags.len());
    for tag in &repo.tags {
        let mut manifests = Vec::with_capacity(repo.platforms.len());
        for platform in &repo.platforms {
            let platform = Platform::parse(platform)?;
            let context = ComponentContext {
                repo: repo.name.clone(),
                tag: tag.clone(),
                os: platform.os.clone(),
                arch: platform.architecture.clone(),
                variant: platform.variant.clone(),
            };
            let component_image = template.render(&context)?;
            manifests.push(ManifestComponent {
                image: format!("{}{}", registry.name, component_image),
                platform,
            });
        }

        let spec = ManifestSpec {
            image: format!("{}{}:{}", registry.name, repo.name, tag),
            manifests,
        };
        debug!(
            "built spec for {} with {} components",
            spec.image,
            spec.manifests.len()
        );
        specs.push(spec);
    }

    Ok(specs)
}

/// Build the spec sequence and validate every spec in it.
///
/// Configuration is validated before expansion so bad input surfaces with
/// the offending value rather than a rendering artifact. Pure: callers
/// thread the returned specs into execution explicitly.
pub fn build_and_validate(registry: &Registry, repo: &Repo) -> Result<Vec<ManifestSpec>> {
    registry.validate()?;
    repo.validate()?;

    let specs = build_specs(registry, repo)?;
    if specs.is_empty() {
        return Err(MantleError::SpecValidation {
            message: "no manifest specs produced".into(),
        });
    }
    for spec in &specs {
        spec.validate()?;
    }

    Ok(specs)
}
