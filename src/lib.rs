//! LXC Exporter: republishes LXC container statistics as Prometheus metrics.
//!
//! On every scrape the exporter lists the active containers with `lxc-ls`,
//! inspects each one with `lxc-info`, parses the `label: value` output into
//! typed samples and hands them to a Prometheus registry.

use std::sync::Arc;

use prometheus::Registry;

pub mod config;
pub mod container;
pub mod error;
pub mod exporter;
pub mod observer;
pub mod runtime;
pub mod server;
pub mod stats;

pub use error::{Error, Result};

/// Runs the LXC exporter.
///
/// Builds the descriptor table and the exporter, registers it with a fresh
/// registry and serves it over HTTP until the process exits.
///
/// # Errors
///
/// Possible errors include:
/// - A metric descriptor or the exporter being rejected by the registry.
/// - Failure to bind the configured listen address.
/// - I/O errors while serving.
pub async fn run(config: config::Config) -> Result<()> {
    let descriptors = Arc::new(exporter::Descriptors::new()?);
    let runtime = runtime::LxcCommands::new(config.lxc_ls.clone(), config.lxc_info.clone());
    let exporter = exporter::Exporter::new(descriptors, runtime, observer::LogObserver);

    let registry = Registry::new();
    registry.register(Box::new(exporter))?;
    log::debug!(
        "lxc-ls: {}, lxc-info: {}",
        config.lxc_ls.display(),
        config.lxc_info.display()
    );

    log::info!(
        "Starting Server: {} (metrics at {})",
        config.listen_address,
        config.metrics_endpoint
    );
    server::MetricsServer::new(registry, &config.metrics_endpoint)
        .listen(&config.listen_address)
        .await
}
