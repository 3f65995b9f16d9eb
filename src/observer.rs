//! Reporting hooks for failures absorbed during a scrape.
//!
//! The scrape pipeline never surfaces per-container problems to its caller.
//! Instead it hands them to a [`ScrapeObserver`], which by default writes them
//! to the log ([`LogObserver`]).

use std::sync::Arc;

use crate::container::{self, ContainerID};
use crate::exporter::{self, SinkError};
use crate::runtime;

/// Receives every failure the scrape pipeline absorbs.
pub trait ScrapeObserver: Send + Sync {
    /// The container listing could not be obtained.
    fn listing_failed(&self, err: &runtime::Error);

    /// A listing line was not a container id.
    fn invalid_container_id(&self, err: &container::Error);

    /// Inspecting a single container failed.
    fn fetch_failed(&self, container_id: ContainerID, err: &runtime::Error);

    /// The scrape cycle as a whole failed.
    fn scrape_failed(&self, err: &exporter::Error);

    /// The scrape failure counter could not be reported after a failed cycle.
    fn failure_report_lost(&self, err: &SinkError);
}

impl<T: ScrapeObserver + ?Sized> ScrapeObserver for Arc<T> {
    fn listing_failed(&self, err: &runtime::Error) {
        (**self).listing_failed(err)
    }

    fn invalid_container_id(&self, err: &container::Error) {
        (**self).invalid_container_id(err)
    }

    fn fetch_failed(&self, container_id: ContainerID, err: &runtime::Error) {
        (**self).fetch_failed(container_id, err)
    }

    fn scrape_failed(&self, err: &exporter::Error) {
        (**self).scrape_failed(err)
    }

    fn failure_report_lost(&self, err: &SinkError) {
        (**self).failure_report_lost(err)
    }
}

/// Observer that logs every failure at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScrapeObserver for LogObserver {
    fn listing_failed(&self, err: &runtime::Error) {
        log::error!("Error while listing LXC containers: {}", err);
    }

    fn invalid_container_id(&self, err: &container::Error) {
        log::error!("Cannot parse LXC id: {}", err);
    }

    fn fetch_failed(&self, container_id: ContainerID, err: &runtime::Error) {
        log::error!(
            target: "lxc stats",
            "failed reading container stats: container_id={}, error={}",
            container_id,
            err
        );
    }

    fn scrape_failed(&self, err: &exporter::Error) {
        log::error!("Error scraping: {}", err);
    }

    fn failure_report_lost(&self, err: &SinkError) {
        log::warn!("failed to report scrape failures: {}", err);
    }
}
