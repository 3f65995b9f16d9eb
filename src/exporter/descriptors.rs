use std::collections::HashMap;

use prometheus::core::Desc;

use crate::stats::MetricKind;

/// Namespace prefixed to every series name.
pub const NAMESPACE: &str = "lxc";

/// Label carrying the container id on per-container series.
pub const CONTAINER_LABEL: &str = "id";

/// Immutable table of the series descriptors published by the exporter.
///
/// Built once before the first scrape and shared read-only afterwards.
#[derive(Debug)]
pub struct Descriptors {
    up: Desc,
    scrape_failures: Desc,
    containers: HashMap<MetricKind, Desc>,
}

impl Descriptors {
    /// Builds the liveness and failure counter descriptors and one descriptor
    /// per [`MetricKind`].
    ///
    /// # Errors
    ///
    /// Returns an error if a series or label name is rejected by the
    /// metrics registry.
    pub fn new() -> prometheus::Result<Self> {
        let up = new_desc("up", "Could the LXC exporter be reached", &[])?;
        let scrape_failures = new_desc(
            "exporter_scrape_failures_total",
            "Number of errors while scraping LXC containers",
            &[],
        )?;
        let mut containers = HashMap::with_capacity(MetricKind::ALL.len());
        for kind in MetricKind::ALL {
            containers.insert(kind, new_desc(kind.name(), kind.label(), &[CONTAINER_LABEL])?);
        }
        Ok(Self {
            up,
            scrape_failures,
            containers,
        })
    }

    pub fn up(&self) -> &Desc {
        &self.up
    }

    pub fn scrape_failures(&self) -> &Desc {
        &self.scrape_failures
    }

    pub fn container(&self, kind: MetricKind) -> &Desc {
        &self.containers[&kind]
    }

    /// Liveness and failure counter descriptors, followed by the
    /// per-container descriptors in [`MetricKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Desc> {
        [&self.up, &self.scrape_failures]
            .into_iter()
            .chain(MetricKind::ALL.iter().map(|kind| self.container(*kind)))
    }
}

fn new_desc(name: &str, help: &str, labels: &[&str]) -> prometheus::Result<Desc> {
    Desc::new(
        format!("{NAMESPACE}_{name}"),
        help.to_owned(),
        labels.iter().map(|label| label.to_string()).collect(),
        HashMap::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_names() {
        let descriptors = Descriptors::new().unwrap();
        let names: Vec<&str> = descriptors.iter().map(|d| d.fq_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "lxc_up",
                "lxc_exporter_scrape_failures_total",
                "lxc_cpu",
                "lxc_memory",
                "lxc_total_bytes",
                "lxc_rx_bytes",
                "lxc_tx_bytes",
                "lxc_io"
            ]
        );
    }

    #[test]
    fn test_container_descriptors_carry_id_label() {
        let descriptors = Descriptors::new().unwrap();
        assert!(descriptors.up().variable_labels.is_empty());
        assert!(descriptors.scrape_failures().variable_labels.is_empty());
        for kind in MetricKind::ALL {
            let desc = descriptors.container(kind);
            assert_eq!(desc.variable_labels, vec![CONTAINER_LABEL.to_owned()]);
            assert_eq!(desc.help, kind.label());
        }
    }
}
