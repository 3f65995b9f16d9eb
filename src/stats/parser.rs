//! Line parser for `lxc-info -S -H` output.
//!
//! Each non-empty line is expected to hold a single `label: value` pair. The
//! line is split on the *first* colon and both halves are trimmed. Labels that
//! do not belong to the [`MetricKind`] vocabulary are skipped, which keeps the
//! exporter working when the inspection tool grows new fields. Values are
//! parsed as `f64`; since `-H` disables unit scaling they are plain numbers.

use crate::container::ContainerID;

use super::{MetricKind, Sample, StatParseError};

/// Parses one line into a metric kind and value.
///
/// # Arguments
/// * `line` - A single line of inspection output, with or without trailing newline.
/// * `lineno` - 1-based line number, used for error reporting only.
///
/// # Returns
/// * `Ok(Some((kind, value)))` for a recognized label with a numeric value.
/// * `Ok(None)` for blank lines and unrecognized labels.
///
/// # Errors
/// * [`StatParseError::MissingSeparator`] if a non-blank line has no colon.
/// * [`StatParseError::InvalidValue`] if a recognized label carries a non-numeric value.
pub fn parse_line(
    line: &str,
    lineno: usize,
) -> Result<Option<(MetricKind, f64)>, StatParseError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (key, value) = line
        .split_once(':')
        .ok_or(StatParseError::MissingSeparator { line: lineno })?;
    let (key, value) = (key.trim(), value.trim());

    let Some(kind) = MetricKind::from_label(key) else {
        return Ok(None);
    };

    let parsed = value
        .parse::<f64>()
        .map_err(|source| StatParseError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
            line: lineno,
            source,
        })?;

    Ok(Some((kind, parsed)))
}

/// Parses the full inspection output of one container into samples.
///
/// Lines that fail to parse are dropped individually; they never prevent the
/// remaining lines from being read. Samples come back in line order.
pub fn parse_samples(text: &str, container_id: ContainerID) -> Vec<Sample> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(line, idx + 1).ok().flatten())
        .map(|(kind, value)| Sample::new(kind, container_id, value))
        .collect()
}
