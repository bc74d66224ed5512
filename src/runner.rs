use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// The bootstrap pipeline did not complete successfully.
///
/// Spawn failures, non-zero exits and signals all end up here; the message is the
/// only thing that tells them apart. [`SystemRunner`] formats it as
/// `Command failed: <command>: <cause>`, so the full pipeline, URL included, is
/// part of the message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PipelineError {
    message: String,
}

impl PipelineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs a command line through a shell interpreter and waits for it.
pub trait CommandRunner {
    fn run_shell(&self, shell: &Path, command: &str) -> Result<(), PipelineError>;
}

/// Spawns the shell as a child process attached to the caller's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_shell(&self, shell: &Path, command: &str) -> Result<(), PipelineError> {
        let status = Command::new(shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|err| {
                PipelineError::new(format!(
                    "Command failed: {command}: could not start {}: {err}",
                    shell.display()
                ))
            })?;

        if status.success() {
            return Ok(());
        }

        Err(PipelineError::new(format!(
            "Command failed: {command}: {}",
            describe_status(status)
        )))
    }
}

fn describe_status(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exited with status {code}");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("terminated by signal {signal}");
        }
    }

    "terminated abnormally".to_string()
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use super::*;

    const SH: &str = "/bin/sh";

    #[test]
    fn successful_command_returns_ok() {
        assert!(SystemRunner.run_shell(Path::new(SH), "true").is_ok());
    }

    #[test]
    fn non_zero_exit_reports_status() {
        let err = SystemRunner
            .run_shell(Path::new(SH), "exit 3")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exit 3"), "{message}");
        assert!(message.contains("exited with status 3"), "{message}");
    }

    #[test]
    fn signal_termination_is_reported() {
        let err = SystemRunner
            .run_shell(Path::new(SH), "kill -9 $$")
            .unwrap_err();
        assert!(err.to_string().contains("terminated by signal 9"), "{err}");
    }

    #[test]
    fn missing_shell_is_a_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let shell = dir.path().join("no-such-shell");
        let err = SystemRunner.run_shell(&shell, "true").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("could not start"), "{message}");
        assert!(message.contains("no-such-shell"), "{message}");
    }

    #[test]
    fn command_runs_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("runs.log");
        let command = format!("echo run >> '{}'", marker.display());

        SystemRunner.run_shell(Path::new(SH), &command).unwrap();

        let contents = fs::read_to_string(&marker).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
