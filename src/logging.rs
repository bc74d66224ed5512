use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`, which keeps a normal
/// run limited to the banner and whatever the installer prints.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initializing logging: {err}"))?;

    Ok(())
}
