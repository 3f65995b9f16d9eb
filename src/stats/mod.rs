//! Typed samples parsed from `lxc-info` statistics output.
//!
//! The inspection tool reports one `label: value` pair per line, using
//! human-readable labels such as `CPU use` or `BlkIO use`. This module maps
//! those labels onto a closed vocabulary ([`MetricKind`]) and turns each
//! recognized line into a [`Sample`] tagged with the container it belongs to.
//!
//! # Main types
//!
//! - [`MetricKind`]: the six per-container series the exporter publishes.
//! - [`Sample`]: one numeric reading for one container and one metric kind.
//! - [`StatParseError`]: why a single line was rejected.
//!
//! # Example
//!
//! ```rust
//! use lxc_exporter::container::ContainerID;
//! use lxc_exporter::stats::{MetricKind, parse_samples};
//!
//! let out = "CPU use: 12.50\nMemory usage: 204800\nUnknownField: 7\n";
//! let samples = parse_samples(out, ContainerID::new(42));
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples[0].kind(), MetricKind::Cpu);
//! assert_eq!(samples[1].value(), 204800.0);
//! ```

mod error;
mod kind;
mod parser;

pub use error::StatParseError;
pub use kind::MetricKind;
pub use parser::{parse_line, parse_samples};

use crate::container::ContainerID;

/// A single numeric reading produced during one scrape cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    kind: MetricKind,
    container_id: ContainerID,
    value: f64,
}

impl Sample {
    pub fn new(kind: MetricKind, container_id: ContainerID, value: f64) -> Self {
        Self {
            kind,
            container_id,
            value,
        }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn container_id(&self) -> ContainerID {
        self.container_id
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
