use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The closed set of per-container metrics published by the exporter.
///
/// Each kind has a series suffix ([`MetricKind::name`]) and the label string
/// `lxc-info` prints for it ([`MetricKind::label`]). Both mappings are
/// one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// CPU time consumed, in nanoseconds.
    Cpu,
    /// Resident memory, in bytes.
    Memory,
    /// Network bytes sent and received.
    TotalBytes,
    /// Network bytes received.
    RxBytes,
    /// Network bytes sent.
    TxBytes,
    /// Block I/O, in bytes.
    Io,
}

static BY_LABEL: LazyLock<HashMap<&'static str, MetricKind>> = LazyLock::new(|| {
    MetricKind::ALL
        .iter()
        .map(|kind| (kind.label(), *kind))
        .collect()
});

impl MetricKind {
    /// All kinds, in descriptor order.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Cpu,
        MetricKind::Memory,
        MetricKind::TotalBytes,
        MetricKind::RxBytes,
        MetricKind::TxBytes,
        MetricKind::Io,
    ];

    /// Series name suffix, appended to the exporter namespace.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Cpu => "cpu",
            MetricKind::Memory => "memory",
            MetricKind::TotalBytes => "total_bytes",
            MetricKind::RxBytes => "rx_bytes",
            MetricKind::TxBytes => "tx_bytes",
            MetricKind::Io => "io",
        }
    }

    /// Label string printed by `lxc-info -S -H`.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU use",
            MetricKind::Memory => "Memory usage",
            MetricKind::TotalBytes => "Total bytes",
            MetricKind::RxBytes => "RX bytes",
            MetricKind::TxBytes => "TX bytes",
            MetricKind::Io => "BlkIO use",
        }
    }

    /// Resolves an already-trimmed label string to its kind.
    ///
    /// Returns `None` for labels the exporter does not track.
    pub fn from_label(label: &str) -> Option<MetricKind> {
        BY_LABEL.get(label).copied()
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_lookup_is_inverse_of_label() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_labels_and_names_are_unique() {
        let labels: HashSet<_> = MetricKind::ALL.iter().map(|k| k.label()).collect();
        let names: HashSet<_> = MetricKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(labels.len(), MetricKind::ALL.len());
        assert_eq!(names.len(), MetricKind::ALL.len());
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(MetricKind::from_label("KMem use"), None);
        assert_eq!(MetricKind::from_label("cpu use"), None);
        assert_eq!(MetricKind::from_label(""), None);
    }
}
