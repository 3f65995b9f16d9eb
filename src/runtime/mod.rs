//! Access to the host's container runtime.
//!
//! The exporter only needs two things from the host: the ids of the currently
//! active containers and a raw statistics dump per container. Both come from
//! external tooling behind the [`ContainerRuntime`] trait, so the scrape logic
//! can run against canned output in tests.
//!
//! The free functions [`list_active_containers`] and [`fetch_stats`] wrap the
//! trait with the exporter's failure policy: a broken listing or a failed
//! inspection is reported to the [`ScrapeObserver`] and degrades to less data,
//! never to an aborted scrape.

mod error;
mod lxc;

pub use error::{Error, Result};
pub use lxc::LxcCommands;

use crate::container::ContainerID;
use crate::observer::ScrapeObserver;

/// Source of raw container listings and statistics.
pub trait ContainerRuntime: Send + Sync {
    /// Returns the raw listing of active containers, one id per line.
    fn list_active(&self) -> Result<String>;

    /// Returns the raw `label: value` statistics for one container.
    fn info(&self, container_id: ContainerID) -> Result<String>;
}

/// Lists the ids of all active containers, in listing order.
///
/// Blank lines are ignored. A line that is not a valid id is reported and
/// skipped; a failed listing is reported and yields no containers.
pub fn list_active_containers(
    runtime: &dyn ContainerRuntime,
    observer: &dyn ScrapeObserver,
) -> Vec<ContainerID> {
    let output = match runtime.list_active() {
        Ok(output) => output,
        Err(err) => {
            observer.listing_failed(&err);
            return Vec::new();
        }
    };

    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<ContainerID>() {
            Ok(id) => Some(id),
            Err(err) => {
                observer.invalid_container_id(&err);
                None
            }
        })
        .collect()
}

/// Fetches the raw statistics of one container.
///
/// A failed inspection is reported and yields empty text, i.e. no samples.
pub fn fetch_stats(
    runtime: &dyn ContainerRuntime,
    container_id: ContainerID,
    observer: &dyn ScrapeObserver,
) -> String {
    runtime.info(container_id).unwrap_or_else(|err| {
        observer.fetch_failed(container_id, &err);
        String::new()
    })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeRuntime;
    use super::*;
    use crate::observer::testing::RecordingObserver;

    #[test]
    fn test_list_active_containers() {
        let runtime = FakeRuntime::with_listing("101\n102\n\n103\n");
        let observer = RecordingObserver::default();
        let ids = list_active_containers(&runtime, &observer);
        assert_eq!(
            ids,
            vec![
                ContainerID::new(101),
                ContainerID::new(102),
                ContainerID::new(103)
            ]
        );
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_empty_listing_is_not_an_error() {
        let runtime = FakeRuntime::with_listing("");
        let observer = RecordingObserver::default();
        assert!(list_active_containers(&runtime, &observer).is_empty());
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_invalid_line_is_skipped() {
        let runtime = FakeRuntime::with_listing("101\nweb01\n102\n");
        let observer = RecordingObserver::default();
        let ids = list_active_containers(&runtime, &observer);
        assert_eq!(ids, vec![ContainerID::new(101), ContainerID::new(102)]);
        assert_eq!(observer.events(), vec!["invalid_container_id".to_owned()]);
    }

    #[test]
    fn test_failed_listing_degrades_to_empty() {
        let runtime = FakeRuntime::default();
        let observer = RecordingObserver::default();
        assert!(list_active_containers(&runtime, &observer).is_empty());
        assert_eq!(observer.events(), vec!["listing_failed".to_owned()]);
    }

    #[test]
    fn test_fetch_stats() {
        let runtime = FakeRuntime::with_listing("1\n").with_info(1, "CPU use: 5\n");
        let observer = RecordingObserver::default();
        assert_eq!(
            fetch_stats(&runtime, ContainerID::new(1), &observer),
            "CPU use: 5\n"
        );
        assert!(observer.events().is_empty());
    }

    #[test]
    fn test_failed_fetch_degrades_to_empty_text() {
        let runtime = FakeRuntime::with_listing("1\n");
        let observer = RecordingObserver::default();
        assert_eq!(fetch_stats(&runtime, ContainerID::new(1), &observer), "");
        assert_eq!(observer.events(), vec!["fetch_failed:1".to_owned()]);
    }
}
