//! Summary structures produced by the aggregation engine.
//!
//! Every float in these structures is already rounded to two decimals. Field
//! names match the serialized document shape returned to API consumers.

use crate::types::observation::Location;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An extreme reading together with the exact hour it was observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstantExtreme {
    pub value: f64,
    pub date_time: DateTime<Utc>,
}

/// An extreme reading together with the calendar day it was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayExtreme {
    pub value: f64,
    pub date: NaiveDate,
}

/// Temperature statistics for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    /// Mean over all hourly readings, not a mean of daily means.
    pub average: f64,
    pub average_by_day: BTreeMap<NaiveDate, f64>,
    pub max: InstantExtreme,
    pub min: InstantExtreme,
}

/// Precipitation statistics for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationSummary {
    pub total: f64,
    pub total_by_day: BTreeMap<NaiveDate, f64>,
    /// Days whose summed precipitation is strictly greater than zero.
    pub days_with_precipitation: usize,
    /// Highest single hourly reading, reported with its own day.
    pub max: DayExtreme,
    /// Mean of the hourly readings.
    pub average: f64,
}

/// Hours beyond the configured hot and cold temperature thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdHours {
    pub hours_above_threshold: usize,
    pub hours_below_threshold: usize,
}

/// Rollup of every observation of a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub temperature_average: f64,
    pub temperature_max: DayExtreme,
    pub temperature_min: DayExtreme,
    pub precipitation_total: f64,
    pub days_with_precipitation: usize,
    pub precipitation_max: DayExtreme,
    pub location: Location,
}

/// Per-city summaries keyed by city name. No figures are combined across cities.
pub type GlobalSummary = BTreeMap<String, CitySummary>;
