//! Mantle - build and publish multi-arch manifest lists.
//!
//! Mantle is a pipeline plugin that expands registry and repository settings
//! into manifest-tool spec files and drives `manifest-tool push from-spec`
//! for each of them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and parameter parsing
//! - [`config`] - Registry and repository configuration and validation
//! - [`error`] - Error types and result aliases
//! - [`exec`] - External manifest-tool invocation
//! - [`plugin`] - Publish orchestration
//! - [`spec`] - Manifest spec building, validation, and rendering
//!
//! # Example
//!
//! ```
//! use mantle::config::{Registry, Repo};
//! use mantle::spec::build_and_validate;
//!
//! let registry = Registry {
//!     name: "index.docker.io".to_string(),
//!     dry_run: true,
//!     ..Default::default()
//! };
//! let repo = Repo {
//!     name: "/octocat/hello-world".to_string(),
//!     tags: vec!["latest".to_string()],
//!     platforms: vec!["linux/amd64".to_string(), "linux/arm64/v8".to_string()],
//!     component_template: mantle::cli::DEFAULT_COMPONENT_TEMPLATE.to_string(),
//! };
//!
//! let specs = build_and_validate(&registry, &repo).unwrap();
//! assert_eq!(specs.len(), 1);
//! assert_eq!(specs[0].image, "index.docker.io/octocat/hello-world:latest");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod plugin;
pub mod spec;

pub use error::{MantleError, Result};
