//! The scrape cycle and its publication as metrics.
//!
//! An [`Exporter`] owns the container runtime, the failure observer and the
//! scrape failure counter. Each call to [`Exporter::scrape`] enumerates the
//! active containers, inspects them one by one and writes the parsed
//! [`Reading`]s to a [`SampleSink`]. The [`prometheus::core::Collector`]
//! implementation drives the same cycle on every registry gather.
//!
//! # Key Components
//!
//! - [`Descriptors`] — immutable table of series names, help texts and labels.
//! - [`Exporter`] — serializes scrape cycles and tracks failed ones.
//! - [`SampleSink`] — where the readings of a cycle go.

mod collector;
mod descriptors;
mod error;
mod registry;
mod sink;

pub use collector::{Exporter, ScrapeOutcome};
pub use descriptors::{CONTAINER_LABEL, Descriptors, NAMESPACE};
pub use error::{Error, Result, SinkError};
pub use registry::to_families;
pub use sink::{Reading, SampleSink};
