//! Defines the hourly observation row consumed by the aggregation engine,
//! together with the coordinate pair attached to every city.

use crate::types::into_utc_trait::IntoUtcDateTime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Geographical coordinates of a city, as stored alongside each observation.
///
/// # Examples
///
/// ```
/// use weatherstats::Location;
///
/// let madrid = Location::new(40.4168, -3.7038);
/// assert_eq!(madrid.latitude, 40.4168);
/// assert_eq!(madrid.longitude, -3.7038);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One hourly weather reading for a named city.
///
/// Rows are plain values: the engine never assumes they are sorted, and
/// duplicate `(city, timestamp)` pairs are counted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    /// City identifier, e.g. `"Madrid"`.
    pub city: String,
    /// Start of the observed hour, in UTC.
    pub timestamp: DateTime<Utc>,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Precipitation in millimetres for the hour.
    pub precipitation: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl ObservationRow {
    /// Builds a row from anything convertible to a UTC instant
    /// (`DateTime<Utc>`, `DateTime<FixedOffset>`, `NaiveDateTime` read as UTC, ...).
    pub fn new(
        city: impl Into<String>,
        timestamp: impl IntoUtcDateTime,
        temperature: f64,
        precipitation: f64,
        location: Location,
    ) -> Self {
        Self {
            city: city.into(),
            timestamp: timestamp.into_utc(),
            temperature,
            precipitation,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    /// Calendar date of the observation, used as the daily grouping key.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }
}
