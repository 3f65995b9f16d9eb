use clap::Parser;

/// Entry point for the LXC exporter.
///
/// Parses the configuration from the command line and environment, then
/// serves container metrics until the process is stopped.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server fails.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug lxc-exporter --telemetry.address :9119 --telemetry.endpoint /metrics
/// ```
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = lxc_exporter::config::Config::parse();
    lxc_exporter::run(config).await?;
    Ok(())
}
