use std::path::PathBuf;

/// Raw content root of the monitoring system repository.
pub const REPO_URL: &str =
    "https://raw.githubusercontent.com/fireinbelly/biomass-conversion-index-monitoring-system/main";

/// Interactive installer script, relative to [`REPO_URL`].
pub const INSTALLER_SCRIPT: &str = "install-interactive.sh";

/// Interpreter used to run the fetch-and-execute pipeline.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Where the installer lives and which shell runs the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub base_url: String,
    pub shell: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            base_url: REPO_URL.to_string(),
            shell: PathBuf::from(DEFAULT_SHELL),
        }
    }
}

impl LauncherConfig {
    /// Full URL of the interactive installer.
    pub fn installer_url(&self) -> String {
        format!(
            "{}/{INSTALLER_SCRIPT}",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Command handed to the shell.
    pub fn pipeline_command(&self) -> String {
        format!("curl -sSL \"{}\" | bash", self.installer_url())
    }

    /// Command shown to the user when the pipeline fails, ready to paste.
    pub fn fallback_command(&self) -> String {
        format!("curl -sSL {} | bash", self.installer_url())
    }
}
