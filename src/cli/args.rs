//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros. The
//! plugin has a single action, so there are no subcommands; every flag is
//! also backed by a `PARAMETER_*` environment variable so a pipeline can
//! configure the plugin without arguments.

use clap::Parser;
use std::path::PathBuf;

/// Default template used to derive each component image name.
pub const DEFAULT_COMPONENT_TEMPLATE: &str =
    "{{Repo}}:{{Tag}}-{{Os}}-{{Arch}}{{if Variant}}-{{Variant}}{{end}}";

/// Mantle - build and publish multi-arch manifest lists.
#[derive(Debug, Parser)]
#[command(name = "mantle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set log level - options: (trace|debug|info|warn|error)
    #[arg(long, env = "PARAMETER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Docker registry the manifest list is published to
    #[arg(long, env = "PARAMETER_REGISTRY", default_value = "index.docker.io")]
    pub registry: String,

    /// User name for communication with the registry
    #[arg(long, env = "PARAMETER_USERNAME")]
    pub username: Option<String>,

    /// Password for communication with the registry
    #[arg(long, env = "PARAMETER_PASSWORD")]
    pub password: Option<String>,

    /// Build and render spec files without publishing to the registry
    #[arg(long, env = "PARAMETER_DRY_RUN")]
    pub dry_run: bool,

    /// Number of retries for pushing a manifest list to the registry
    #[arg(long, env = "PARAMETER_PUSH_RETRY", default_value_t = 0)]
    pub push_retry: u32,

    /// Repository name for the image
    ///
    /// Left empty by default so a missing value surfaces as a configuration
    /// validation error rather than a usage error.
    #[arg(long, env = "PARAMETER_REPO", default_value = "")]
    pub repo: String,

    /// Repository tags of the manifest list/image index (comma-separated)
    #[arg(
        long,
        env = "PARAMETER_TAGS",
        value_delimiter = ',',
        default_value = "latest"
    )]
    pub tags: Vec<String>,

    /// Docker platforms to include in the manifest list (comma-separated)
    #[arg(
        long,
        env = "PARAMETER_PLATFORMS",
        value_delimiter = ',',
        default_values_t = ["linux/amd64".to_string(), "linux/arm64/v8".to_string()]
    )]
    pub platforms: Vec<String>,

    /// Template used to render each component image
    #[arg(
        long,
        env = "PARAMETER_COMPONENT_TEMPLATE",
        default_value = DEFAULT_COMPONENT_TEMPLATE
    )]
    pub component_template: String,

    /// Directory rendered spec files are written to
    #[arg(long, env = "PARAMETER_SPEC_DIR", default_value = "/root/specs")]
    pub spec_dir: PathBuf,

    /// Directory the Docker auth config is written to (defaults to ~/.docker)
    #[arg(long, env = "DOCKER_CONFIG", value_name = "DIR")]
    pub docker_config: Option<PathBuf>,
}
