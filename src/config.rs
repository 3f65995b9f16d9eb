//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration of the exporter.
///
/// Every option can be given on the command line or through the matching
/// `LXC_EXPORTER_*` environment variable.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use lxc_exporter::config::Config;
///
/// let config = Config::parse_from(["lxc-exporter", "--telemetry.address", ":9200"]);
/// assert_eq!(config.listen_address, "0.0.0.0:9200");
/// assert_eq!(config.metrics_endpoint, "/metrics");
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "lxc-exporter", version, about = "Exposes LXC container statistics to Prometheus")]
pub struct Config {
    /// Address on which to expose metrics.
    ///
    /// A bare `:PORT` listens on all interfaces.
    #[arg(
        long = "telemetry.address",
        env = "LXC_EXPORTER_TELEMETRY_ADDRESS",
        default_value = "0.0.0.0:9119",
        value_parser = parse_listen_address
    )]
    pub listen_address: String,

    /// Path under which to expose metrics.
    #[arg(
        long = "telemetry.endpoint",
        env = "LXC_EXPORTER_TELEMETRY_ENDPOINT",
        default_value = "/metrics",
        value_parser = parse_endpoint
    )]
    pub metrics_endpoint: String,

    /// Program used to list active containers.
    #[arg(long = "lxc-ls", env = "LXC_EXPORTER_LXC_LS", default_value = "lxc-ls")]
    pub lxc_ls: PathBuf,

    /// Program used to read per-container statistics.
    #[arg(long = "lxc-info", env = "LXC_EXPORTER_LXC_INFO", default_value = "lxc-info")]
    pub lxc_info: PathBuf,
}

fn parse_listen_address(raw: &str) -> Result<String, String> {
    let Some((host, port)) = raw.rsplit_once(':') else {
        return Err(format!("`{raw}` is missing a port"));
    };
    port.parse::<u16>()
        .map_err(|err| format!("invalid port `{port}`: {err}"))?;

    if host.is_empty() {
        Ok(format!("0.0.0.0:{port}"))
    } else {
        Ok(raw.to_owned())
    }
}

fn parse_endpoint(raw: &str) -> Result<String, String> {
    if raw.starts_with('/') {
        Ok(raw.to_owned())
    } else {
        Err(format!("endpoint `{raw}` must start with '/'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["lxc-exporter"]).unwrap();
        assert_eq!(config.listen_address, "0.0.0.0:9119");
        assert_eq!(config.metrics_endpoint, "/metrics");
        assert_eq!(config.lxc_ls, PathBuf::from("lxc-ls"));
        assert_eq!(config.lxc_info, PathBuf::from("lxc-info"));
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "lxc-exporter",
            "--telemetry.address",
            "127.0.0.1:9000",
            "--telemetry.endpoint",
            "/lxc",
            "--lxc-info",
            "/usr/local/bin/lxc-info",
        ])
        .unwrap();
        assert_eq!(config.listen_address, "127.0.0.1:9000");
        assert_eq!(config.metrics_endpoint, "/lxc");
        assert_eq!(config.lxc_info, PathBuf::from("/usr/local/bin/lxc-info"));
    }

    #[test]
    fn test_parse_listen_address() {
        assert_eq!(parse_listen_address(":9119").unwrap(), "0.0.0.0:9119");
        assert_eq!(parse_listen_address("[::1]:80").unwrap(), "[::1]:80");
        assert!(parse_listen_address("localhost").is_err());
        assert!(parse_listen_address(":http").is_err());
        assert!(parse_listen_address(":70000").is_err());
    }

    #[test]
    fn test_parse_endpoint() {
        assert!(parse_endpoint("/metrics").is_ok());
        assert!(parse_endpoint("metrics").is_err());
    }
}
