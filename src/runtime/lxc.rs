use std::path::{Path, PathBuf};
use std::process::Command;

use crate::container::ContainerID;

use super::{ContainerRuntime, Error, Result};

const DEFAULT_LXC_LS: &str = "lxc-ls";
const DEFAULT_LXC_INFO: &str = "lxc-info";

/// [`ContainerRuntime`] backed by the `lxc-ls` and `lxc-info` command line tools.
///
/// Both commands run synchronously and without a timeout; a hung command
/// blocks the calling scrape until it exits.
#[derive(Debug, Clone)]
pub struct LxcCommands {
    lxc_ls: PathBuf,
    lxc_info: PathBuf,
}

impl LxcCommands {
    /// Creates a runtime that invokes the given programs.
    ///
    /// # Arguments
    ///
    /// * `lxc_ls` - Program used to list active containers.
    /// * `lxc_info` - Program used to inspect a single container.
    pub fn new(lxc_ls: impl Into<PathBuf>, lxc_info: impl Into<PathBuf>) -> Self {
        Self {
            lxc_ls: lxc_ls.into(),
            lxc_info: lxc_info.into(),
        }
    }
}

impl Default for LxcCommands {
    fn default() -> Self {
        Self::new(DEFAULT_LXC_LS, DEFAULT_LXC_INFO)
    }
}

impl ContainerRuntime for LxcCommands {
    /// Runs `lxc-ls --active -1`, which prints one container per line.
    fn list_active(&self) -> Result<String> {
        run(&self.lxc_ls, &["--active", "-1"])
    }

    /// Runs `lxc-info -S -H -n <id>`: all statistics, raw units, no banner.
    fn info(&self, container_id: ContainerID) -> Result<String> {
        let id = container_id.to_string();
        run(&self.lxc_info, &["-S", "-H", "-n", &id])
    }
}

fn run(program: &Path, args: &[&str]) -> Result<String> {
    log::trace!("running {} {}", program.display(), args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| Error::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::CommandFailed {
            program: program.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    String::from_utf8(output.stdout).map_err(|source| Error::InvalidUtf8 {
        program: program.to_path_buf(),
        source,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command_returns_stdout() {
        let runtime = LxcCommands::new("true", "true");
        assert_eq!(runtime.list_active().unwrap(), "");
        assert_eq!(runtime.info(ContainerID::new(101)).unwrap(), "");
    }

    #[test]
    fn test_non_zero_exit_is_an_error() {
        let runtime = LxcCommands::new("false", "false");
        let err = runtime.list_active().unwrap_err();
        match err {
            Error::CommandFailed {
                program, status, ..
            } => {
                assert_eq!(program, PathBuf::from("false"));
                assert!(!status.success());
            }
            _ => panic!("Expected CommandFailed error"),
        }
        assert!(runtime.info(ContainerID::new(1)).is_err());
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let runtime = LxcCommands::new(
            "/nonexistent/lxc-exporter/lxc-ls",
            "/nonexistent/lxc-exporter/lxc-info",
        );
        assert!(matches!(runtime.list_active(), Err(Error::Spawn { .. })));
        assert!(matches!(
            runtime.info(ContainerID::new(7)),
            Err(Error::Spawn { .. })
        ));
    }
}
