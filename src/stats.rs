//! The aggregation engine: pure functions turning observation rows into
//! summaries. Nothing in here performs I/O or logs, so every function can be
//! called concurrently on shared input.
//!
//! All windowed operations return `None` when no row survives the date
//! filter. That is the "no data" outcome and is distinct from a summary whose
//! fields happen to be zero.

pub mod global;
pub mod precipitation;
pub mod temperature;

use crate::types::observation::ObservationRow;

/// Scans for the row whose reading wins under `replaces(candidate, current)`.
/// Ties keep the earlier row. NaN readings never win; if all readings are NaN
/// the first row is returned.
fn extreme_row<'a>(
    rows: &[&'a ObservationRow],
    reading: impl Fn(&ObservationRow) -> f64,
    replaces: impl Fn(f64, f64) -> bool,
) -> Option<&'a ObservationRow> {
    let mut best: Option<&'a ObservationRow> = None;
    for &row in rows {
        let value = reading(row);
        if value.is_nan() {
            continue;
        }
        match best {
            Some(current) if !replaces(value, reading(current)) => {}
            _ => best = Some(row),
        }
    }
    best.or_else(|| rows.first().copied())
}

pub(crate) fn max_row<'a>(
    rows: &[&'a ObservationRow],
    reading: impl Fn(&ObservationRow) -> f64,
) -> Option<&'a ObservationRow> {
    extreme_row(rows, reading, |candidate, current| candidate > current)
}

pub(crate) fn min_row<'a>(
    rows: &[&'a ObservationRow],
    reading: impl Fn(&ObservationRow) -> f64,
) -> Option<&'a ObservationRow> {
    extreme_row(rows, reading, |candidate, current| candidate < current)
}
