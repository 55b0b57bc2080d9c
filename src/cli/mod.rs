//! Command-line interface for Mantle.
//!
//! The plugin exposes a flags-only interface parsed with clap's derive
//! macros; see [`args`] for the full flag and environment variable table.

pub mod args;

pub use args::{Cli, DEFAULT_COMPONENT_TEMPLATE};
