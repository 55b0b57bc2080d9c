//! Registry configuration and credential materialization.
//!
//! manifest-tool authenticates from the standard Docker config file, so the
//! plugin writes `<docker-config-dir>/config.json` before invoking it.

use base64::Engine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{MantleError, Result};

/// Registry connection settings for the plugin.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Registry host the manifest list is published to.
    pub name: String,

    /// User name for registry authentication.
    pub username: Option<String>,

    /// Password for registry authentication.
    pub password: Option<String>,

    /// Build and render specs without pushing.
    pub dry_run: bool,

    /// Number of retries for the push of each manifest list.
    pub push_retry: u32,
}

/// Docker config file structure, `auths` section only.
#[derive(Debug, Serialize)]
struct DockerConfig {
    auths: BTreeMap<String, DockerAuthEntry>,
}

/// Entry in the Docker config auths section.
#[derive(Debug, Serialize)]
struct DockerAuthEntry {
    auth: String,
}

impl Registry {
    /// Verify the registry configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(MantleError::ConfigValidation {
                message: "no registry name provided".into(),
            });
        }
        Ok(())
    }

    /// Write the Docker auth config consumed by manifest-tool.
    ///
    /// No file is written when credentials are absent (anonymous push).
    pub fn write_auth(&self, docker_config_dir: &Path) -> Result<()> {
        let (Some(username), Some(password)) = (&self.username, &self.password) else {
            debug!("no registry credentials provided, skipping auth config");
            return Ok(());
        };

        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", username, password));
        let mut auths = BTreeMap::new();
        auths.insert(self.name.clone(), DockerAuthEntry { auth: encoded });
        let config = DockerConfig { auths };
        let data = serde_json::to_vec_pretty(&config).map_err(anyhow::Error::from)?;

        fs::create_dir_all(docker_config_dir)?;
        let path = docker_config_dir.join("config.json");
        fs::write(&path, data)?;
        info!("wrote registry auth for {} to {}", self.name, path.display());

        Ok(())
    }
}

/// Default location of the Docker config directory.
///
/// Honors `DOCKER_CONFIG` when set, falling back to `~/.docker`.
pub fn default_docker_config_dir() -> PathBuf {
    if let Ok(dir) = env::var("DOCKER_CONFIG") {
        return PathBuf::from(dir);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".docker")
}
