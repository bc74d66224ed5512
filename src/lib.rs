pub mod cli;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod runner;

/// Run the command line interface and return an exit code.
pub fn run_cli() -> i32 {
    cli::run()
}
