use std::sync::mpsc::Sender;

use crate::stats::Sample;

use super::SinkError;

/// One value written to a [`SampleSink`] during a scrape cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Liveness of the exporter itself; always `1` when emitted.
    Up(f64),
    /// A per-container sample.
    Container(Sample),
    /// Current value of the scrape failure counter.
    ScrapeFailures(u64),
}

/// Destination for the readings of a scrape cycle.
pub trait SampleSink {
    fn emit(&mut self, reading: Reading) -> Result<(), SinkError>;
}

impl SampleSink for Vec<Reading> {
    fn emit(&mut self, reading: Reading) -> Result<(), SinkError> {
        self.push(reading);
        Ok(())
    }
}

/// Streams readings to another thread; fails once the receiver is dropped.
impl SampleSink for Sender<Reading> {
    fn emit(&mut self, reading: Reading) -> Result<(), SinkError> {
        self.send(reading).map_err(|_| SinkError::Closed)
    }
}
