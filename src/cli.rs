use std::ffi::OsString;
use std::io;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

use crate::config::LauncherConfig;
use crate::launcher::{LaunchOutcome, launch};
use crate::logging::init_logging;
use crate::runner::SystemRunner;

#[derive(Debug, Parser)]
#[command(
    name = "biomass-bootstrap",
    version,
    about = "Download and run the Biomass Conversion Index Monitoring System installer"
)]
pub struct Cli {}

/// What the process should do after looking at its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invocation {
    Launch,
    Exit(i32),
}

/// Parse arguments, run the launcher and return the process exit code.
pub fn run() -> i32 {
    if let Err(err) = init_logging() {
        eprintln!("warning: {err:#}");
    }

    if let Invocation::Exit(code) = invocation(std::env::args_os()) {
        return code;
    }

    let config = LauncherConfig::default();
    let stdout = io::stdout();
    let stderr = io::stderr();

    exit_code(launch(
        &config,
        &SystemRunner,
        &mut stdout.lock(),
        &mut stderr.lock(),
    ))
}

/// `--help` and `--version` answer and exit 0; anything else the parser rejects is
/// ignored so the installer still runs.
fn invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => Invocation::Launch,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            Invocation::Exit(0)
        }
        Err(err) => {
            debug!(reason = ?err.kind(), "ignoring command line arguments");
            Invocation::Launch
        }
    }
}

fn exit_code(result: anyhow::Result<LaunchOutcome>) -> i32 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("biomass-bootstrap error: {err:#}");
            1
        }
    }
}
