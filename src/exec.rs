//! External manifest-tool invocation.
//!
//! The invoked tool's stdout and stderr are connected to the plugin's own
//! streams so registry push progress lands in the build log unchanged.

use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use crate::error::{MantleError, Result};

/// Binary name of the external publishing tool.
const MANIFEST_TOOL: &str = "manifest-tool";

/// Resolve the manifest-tool binary.
///
/// `MANIFEST_TOOL_BIN` overrides the PATH lookup.
pub fn manifest_tool_bin() -> String {
    env::var("MANIFEST_TOOL_BIN").unwrap_or_else(|_| MANIFEST_TOOL.to_string())
}

/// Command that reports the tool version.
pub fn version_command(bin: &str) -> Command {
    let mut cmd = Command::new(bin);
    cmd.arg("--version");
    cmd
}

/// Command that pushes the manifest list described by a spec file.
pub fn push_command(bin: &str, spec_file: &Path) -> Command {
    let mut cmd = Command::new(bin);
    cmd.arg("push").arg("from-spec").arg(spec_file);
    cmd
}

/// Run a command to completion with inherited stdio.
///
/// # Errors
///
/// Returns [`MantleError::CommandFailed`] when the command cannot be
/// launched or exits non-zero.
pub fn run_command(command: &mut Command) -> Result<()> {
    let rendered = render_command(command);
    debug!("running: {}", rendered);

    let status = command
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| MantleError::CommandFailed {
            command: rendered.clone(),
            code: None,
        })?;

    if !status.success() {
        return Err(MantleError::CommandFailed {
            command: rendered,
            code: status.code(),
        });
    }

    Ok(())
}

/// Render a command line for log and error messages.
fn render_command(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn version_command_queries_version() {
        let cmd = version_command("manifest-tool");
        assert_eq!(cmd.get_program(), "manifest-tool");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["--version"]);
    }

    #[test]
    fn push_command_pushes_from_spec_file() {
        let spec_file = PathBuf::from("/root/specs/spec_0.yml");
        let cmd = push_command("manifest-tool", &spec_file);
        assert_eq!(cmd.get_program(), "manifest-tool");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["push", "from-spec", "/root/specs/spec_0.yml"]);
    }

    #[test]
    fn manifest_tool_bin_defaults_to_path_name() {
        if env::var("MANIFEST_TOOL_BIN").is_err() {
            assert_eq!(manifest_tool_bin(), "manifest-tool");
        }
    }

    #[test]
    #[cfg(unix)]
    fn run_command_succeeds_on_zero_exit() {
        let mut cmd = Command::new("true");
        assert!(run_command(&mut cmd).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn run_command_fails_on_nonzero_exit() {
        let mut cmd = Command::new("false");
        let err = run_command(&mut cmd).unwrap_err();
        assert!(matches!(
            err,
            MantleError::CommandFailed { code: Some(1), .. }
        ));
    }

    #[test]
    fn run_command_fails_on_missing_binary() {
        let mut cmd = Command::new("/nonexistent/definitely-not-a-binary");
        let err = run_command(&mut cmd).unwrap_err();
        assert!(matches!(err, MantleError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn render_command_joins_program_and_args() {
        let spec_file = PathBuf::from("/tmp/spec_3.yml");
        let cmd = push_command("manifest-tool", &spec_file);
        assert_eq!(
            render_command(&cmd),
            "manifest-tool push from-spec /tmp/spec_3.yml"
        );
    }
}
