//! Mantle CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mantle::cli::Cli;
use mantle::config::{default_docker_config_dir, Registry, Repo};
use mantle::exec::manifest_tool_bin;
use mantle::plugin::Plugin;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `RUST_LOG` environment variable (if set)
/// 2. `--log-level` / `PARAMETER_LOG_LEVEL` (default `info`)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("mantle={}", log_level)))
        .unwrap_or_else(|_| EnvFilter::new("mantle=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    tracing::debug!(
        "Mantle starting for registry {} repo {}",
        cli.registry,
        cli.repo
    );

    let plugin = Plugin {
        registry: Registry {
            name: cli.registry,
            username: cli.username,
            password: cli.password,
            dry_run: cli.dry_run,
            push_retry: cli.push_retry,
        },
        repo: Repo {
            name: cli.repo,
            tags: cli.tags,
            platforms: cli.platforms,
            component_template: cli.component_template,
        },
        spec_dir: cli.spec_dir,
        docker_config_dir: cli.docker_config.unwrap_or_else(default_docker_config_dir),
        tool_bin: manifest_tool_bin(),
    };

    match plugin.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
