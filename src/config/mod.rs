//! Plugin configuration: registry and repository settings.
//!
//! Configuration arrives fully resolved from the CLI layer (flags or
//! `PARAMETER_*` environment variables) and is immutable afterwards:
//! - Registry settings and credential materialization in [`registry`]
//! - Repository settings and naming rules in [`repo`]

pub mod registry;
pub mod repo;

pub use registry::{default_docker_config_dir, Registry};
pub use repo::{is_valid_tag, Repo, ALLOWED_PLATFORMS};
