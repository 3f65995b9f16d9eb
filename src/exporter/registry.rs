//! Bridges the [`Exporter`] into a [`prometheus::Registry`].
//!
//! Every call to [`Collector::collect`] runs one full scrape cycle and turns
//! its readings into metric families: `lxc_up` as a gauge, the failure
//! counter and all per-container series as counters.

use prometheus::core::{Collector, Desc};
use prometheus::proto::{Counter, Gauge, LabelPair, Metric, MetricFamily, MetricType};

use super::descriptors::CONTAINER_LABEL;
use super::{Descriptors, Exporter, Reading};

impl Collector for Exporter {
    fn desc(&self) -> Vec<&Desc> {
        self.descriptors().iter().collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let mut readings: Vec<Reading> = Vec::new();
        // Cycle failures are already counted and reported inside `scrape`.
        let _ = self.scrape(&mut readings);
        to_families(self.descriptors(), &readings)
    }
}

/// Groups readings into one family per series, keeping first-seen order
/// between families and emission order within each family.
pub fn to_families(descriptors: &Descriptors, readings: &[Reading]) -> Vec<MetricFamily> {
    let mut families: Vec<MetricFamily> = Vec::new();

    for reading in readings {
        let (desc, metric_type, metric) = match reading {
            Reading::Up(value) => (descriptors.up(), MetricType::GAUGE, gauge(*value)),
            Reading::ScrapeFailures(total) => (
                descriptors.scrape_failures(),
                MetricType::COUNTER,
                counter(*total as f64, None),
            ),
            Reading::Container(sample) => (
                descriptors.container(sample.kind()),
                MetricType::COUNTER,
                counter(sample.value(), Some(sample.container_id().to_string())),
            ),
        };

        let idx = match families.iter().position(|f| f.get_name() == desc.fq_name) {
            Some(idx) => idx,
            None => {
                families.push(new_family(desc, metric_type));
                families.len() - 1
            }
        };
        families[idx].mut_metric().push(metric);
    }

    families
}

fn new_family(desc: &Desc, metric_type: MetricType) -> MetricFamily {
    let mut family = MetricFamily::default();
    family.set_name(desc.fq_name.clone());
    family.set_help(desc.help.clone());
    family.set_field_type(metric_type);
    family
}

fn gauge(value: f64) -> Metric {
    let mut gauge = Gauge::default();
    gauge.set_value(value);
    let mut metric = Metric::default();
    metric.set_gauge(gauge);
    metric
}

fn counter(value: f64, container_id: Option<String>) -> Metric {
    let mut counter = Counter::default();
    counter.set_value(value);
    let mut metric = Metric::default();
    metric.set_counter(counter);
    if let Some(container_id) = container_id {
        let mut label = LabelPair::default();
        label.set_name(CONTAINER_LABEL.to_owned());
        label.set_value(container_id);
        metric.mut_label().push(label);
    }
    metric
}
