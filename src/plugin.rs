//! End-to-end publish orchestration.
//!
//! [`Plugin::execute`] runs the pipeline strictly in order: credential
//! materialization, a tool version probe, spec generation and validation,
//! spec-directory preparation, then one push per spec file. The first
//! failing step aborts everything after it; completed steps are not rolled
//! back.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::{Registry, Repo};
use crate::error::Result;
use crate::exec::{push_command, run_command, version_command};
use crate::spec::build_and_validate;

/// The configured plugin, ready to execute.
#[derive(Debug)]
pub struct Plugin {
    /// Registry settings, including credentials and dry-run mode.
    pub registry: Registry,

    /// Repository settings the specs are expanded from.
    pub repo: Repo,

    /// Directory rendered spec files are written to.
    pub spec_dir: PathBuf,

    /// Directory the Docker auth config is written to.
    pub docker_config_dir: PathBuf,

    /// Resolved manifest-tool binary.
    pub tool_bin: String,
}

impl Plugin {
    /// Run the publish pipeline.
    pub fn execute(&self) -> Result<()> {
        self.registry.write_auth(&self.docker_config_dir)?;

        // Version output is purely diagnostic, but a failure here means the
        // tool is missing or broken, so the run stops before writing specs.
        run_command(&mut version_command(&self.tool_bin))?;

        let specs = build_and_validate(&self.registry, &self.repo)?;

        fs::create_dir_all(&self.spec_dir)?;

        for (index, spec) in specs.iter().enumerate() {
            info!("processing manifest list/image index {}", spec.image);
            let rendered = spec.render()?;
            debug!("rendered spec:\n{}", rendered);

            let spec_file = self.spec_dir.join(format!("spec_{}.yml", index));
            fs::write(&spec_file, &rendered)?;

            if self.registry.dry_run {
                info!("not pushing {} as dry_run is true", spec.image);
                continue;
            }
            self.push_with_retry(&spec_file)?;
        }

        Ok(())
    }

    /// Push one spec file, retrying up to the configured retry count.
    ///
    /// Attempts are immediate, with a warning logged per failure; the last
    /// error is returned once the budget is exhausted.
    fn push_with_retry(&self, spec_file: &Path) -> Result<()> {
        let attempts = self.registry.push_retry.saturating_add(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            match run_command(&mut push_command(&self.tool_bin, spec_file)) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if attempt < attempts {
                        warn!("push attempt {}/{} failed: {}", attempt, attempts, err);
                    }
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.expect("at least one push attempt"))
    }
}
