use std::io::Write;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::LauncherConfig;
use crate::runner::CommandRunner;

const BANNER_TITLE: &str = "🌱 Biomass Conversion Index Monitoring System";
const BANNER_RULE: &str = "==============================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Succeeded,
    Failed,
}

impl LaunchOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            LaunchOutcome::Succeeded => 0,
            LaunchOutcome::Failed => 1,
        }
    }
}

/// Print the banner, run the installer pipeline once and report how it went.
///
/// A failing pipeline is not an error here: it is reported on `err`/`out` and
/// turned into [`LaunchOutcome::Failed`]. The `Err` case only covers being unable
/// to write to the terminal.
pub fn launch<R, O, E>(
    config: &LauncherConfig,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<LaunchOutcome>
where
    R: CommandRunner + ?Sized,
    O: Write,
    E: Write,
{
    write_banner(out).context("writing banner")?;

    let command = config.pipeline_command();
    debug!(shell = %config.shell.display(), %command, "starting installer pipeline");

    match runner.run_shell(&config.shell, &command) {
        Ok(()) => {
            info!("installer pipeline finished");
            Ok(LaunchOutcome::Succeeded)
        }
        Err(failure) => {
            info!(error = %failure, "installer pipeline failed");
            writeln!(err, "❌ Installation failed: {failure}")
                .context("writing failure message")?;
            write_fallback(out, config).context("writing fallback instructions")?;
            Ok(LaunchOutcome::Failed)
        }
    }
}

fn write_banner<O: Write>(out: &mut O) -> std::io::Result<()> {
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out)?;
    writeln!(out, "📥 Downloading installer...")?;
    writeln!(out, "🚀 Running interactive installer...")?;
    writeln!(out)?;
    // The child writes straight to the terminal, so ours must land first.
    out.flush()
}

fn write_fallback<O: Write>(out: &mut O, config: &LauncherConfig) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "💡 Fallback: Try manual installation:")?;
    writeln!(out, "   {}", config.fallback_command())?;
    out.flush()
}
