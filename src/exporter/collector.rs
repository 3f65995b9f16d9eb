use std::sync::{Arc, Mutex, PoisonError};

use crate::observer::ScrapeObserver;
use crate::runtime::{self, ContainerRuntime};
use crate::stats;

use super::{Descriptors, Error, Reading, Result, SampleSink};

/// Result of a single scrape cycle.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The cycle ran to completion. Individual containers may still have
    /// contributed no samples.
    Success,
    /// The cycle itself failed and the failure counter was incremented.
    Failed(Error),
}

impl ScrapeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success)
    }
}

/// State shared across scrape cycles. Only touched while the lock is held.
#[derive(Debug, Default)]
struct ScrapeState {
    scrape_failures: u64,
}

/// Scrapes every active container and publishes the results.
///
/// Overlapping calls to [`Exporter::scrape`] are serialized: at most one
/// cycle runs at a time, and all of its readings reach the sink before the
/// next cycle starts.
pub struct Exporter {
    state: Mutex<ScrapeState>,
    descriptors: Arc<Descriptors>,
    runtime: Box<dyn ContainerRuntime>,
    observer: Box<dyn ScrapeObserver>,
}

impl Exporter {
    /// Constructs an [`Exporter`].
    ///
    /// # Arguments
    ///
    /// * `descriptors` - The series descriptor table, built once at startup.
    /// * `runtime` - Where container listings and statistics come from.
    /// * `observer` - Receives every failure absorbed during a scrape.
    pub fn new(
        descriptors: Arc<Descriptors>,
        runtime: impl ContainerRuntime + 'static,
        observer: impl ScrapeObserver + 'static,
    ) -> Self {
        Self {
            state: Mutex::new(ScrapeState::default()),
            descriptors,
            runtime: Box::new(runtime),
            observer: Box::new(observer),
        }
    }

    pub fn descriptors(&self) -> &Descriptors {
        &self.descriptors
    }

    /// Number of failed scrape cycles since startup.
    pub fn scrape_failures(&self) -> u64 {
        self.lock().scrape_failures
    }

    /// Runs one scrape cycle, writing every reading to `sink`.
    ///
    /// The cycle starts with a liveness reading, followed by the samples of
    /// each active container in listing order. Containers that cannot be
    /// inspected contribute nothing. If the cycle itself fails, the failure
    /// counter is incremented and its new value is written to `sink`.
    pub fn scrape(&self, sink: &mut dyn SampleSink) -> ScrapeOutcome {
        let mut state = self.lock();
        let before = std::time::Instant::now();

        let outcome = match self.collect(sink) {
            Ok(()) => ScrapeOutcome::Success,
            Err(err) => {
                self.observer.scrape_failed(&err);
                state.scrape_failures += 1;
                let report = Reading::ScrapeFailures(state.scrape_failures);
                if let Err(report_err) = sink.emit(report) {
                    self.observer.failure_report_lost(&report_err);
                }
                ScrapeOutcome::Failed(err)
            }
        };

        log::trace!("scrape took {} microseconds", before.elapsed().as_micros());
        outcome
    }

    fn collect(&self, sink: &mut dyn SampleSink) -> Result<()> {
        sink.emit(Reading::Up(1.0))?;

        let observer = self.observer.as_ref();
        for container_id in runtime::list_active_containers(self.runtime.as_ref(), observer) {
            let text = runtime::fetch_stats(self.runtime.as_ref(), container_id, observer);
            for sample in stats::parse_samples(&text, container_id) {
                sink.emit(Reading::Container(sample))?;
            }
        }

        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScrapeState> {
        // The state is a plain counter; a panic mid-scrape cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("state", &self.state)
            .field("descriptors", &self.descriptors)
            .finish_non_exhaustive()
    }
}
