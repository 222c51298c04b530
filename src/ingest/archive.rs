//! Decoding of Open-Meteo archive responses (`hourly=temperature_2m,precipitation`,
//! `timezone=UTC`) into observation rows. Fetching the payload is the caller's job.

use crate::error::WeatherStatsError;
use crate::types::observation::{Location, ObservationRow};
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Deserialize;

const ARCHIVE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub hourly: ArchiveHourly,
}

/// Column-oriented hourly block: the i-th entries of each array belong together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArchiveHourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
}

impl ArchiveResponse {
    pub fn from_json(json: &str) -> Result<Self, WeatherStatsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts the hourly block into rows for `city` at `location`.
    ///
    /// `location` is the geocoded position of the city rather than the grid
    /// cell the archive snapped to. Hours missing either reading are skipped.
    pub fn into_rows(
        self,
        city: &str,
        location: Location,
    ) -> Result<Vec<ObservationRow>, WeatherStatsError> {
        let ArchiveHourly {
            time,
            temperature_2m,
            precipitation,
        } = self.hourly;

        if time.len() != temperature_2m.len() || time.len() != precipitation.len() {
            return Err(WeatherStatsError::ArchiveLengthMismatch {
                times: time.len(),
                temperatures: temperature_2m.len(),
                precipitations: precipitation.len(),
            });
        }

        let mut rows = Vec::with_capacity(time.len());
        let mut skipped = 0usize;
        for ((time, temperature), precipitation) in
            time.into_iter().zip(temperature_2m).zip(precipitation)
        {
            let timestamp = NaiveDateTime::parse_from_str(&time, ARCHIVE_TIME_FORMAT)
                .map_err(|e| WeatherStatsError::InvalidArchiveTime(time.clone(), e))?;
            match (temperature, precipitation) {
                (Some(temperature), Some(precipitation)) => rows.push(ObservationRow::new(
                    city,
                    timestamp,
                    temperature,
                    precipitation,
                    location,
                )),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(
                "Skipped {} archive hours with missing readings for {}",
                skipped, city
            );
        }
        info!("Decoded {} archive hours for {}", rows.len(), city);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const PAYLOAD: &str = r#"{
        "latitude": 40.4,
        "longitude": -3.7,
        "generationtime_ms": 0.5,
        "timezone": "UTC",
        "hourly_units": {"time": "iso8601", "temperature_2m": "°C", "precipitation": "mm"},
        "hourly": {
            "time": ["2024-07-01T00:00", "2024-07-01T01:00", "2024-07-01T02:00"],
            "temperature_2m": [21.4, null, 19.8],
            "precipitation": [0.0, 0.1, 0.3]
        }
    }"#;

    #[test]
    fn test_decode_payload() {
        let response = ArchiveResponse::from_json(PAYLOAD).unwrap();
        assert_eq!(response.latitude, 40.4);

        let madrid = Location::new(40.4168, -3.7038);
        let rows = response.into_rows("Madrid", madrid).unwrap();

        // the hour with a null temperature is skipped
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Madrid");
        assert_eq!(rows[0].timestamp, Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(rows[1].temperature, 19.8);
        assert_eq!(rows[1].precipitation, 0.3);
        assert_eq!(rows[1].location(), madrid);
    }

    #[test]
    fn test_length_mismatch() {
        let json = r#"{"latitude": 1.0, "longitude": 2.0, "hourly": {
            "time": ["2024-07-01T00:00"], "temperature_2m": [], "precipitation": [0.0]}}"#;
        let err = ArchiveResponse::from_json(json)
            .unwrap()
            .into_rows("X", Location::new(1.0, 2.0))
            .unwrap_err();
        assert!(matches!(
            err,
            WeatherStatsError::ArchiveLengthMismatch { times: 1, temperatures: 0, precipitations: 1 }
        ));
    }

    #[test]
    fn test_bad_time_and_bad_json() {
        let json = r#"{"latitude": 1.0, "longitude": 2.0, "hourly": {
            "time": ["01/07/2024 00:00"], "temperature_2m": [1.0], "precipitation": [0.0]}}"#;
        let err = ArchiveResponse::from_json(json)
            .unwrap()
            .into_rows("X", Location::new(1.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, WeatherStatsError::InvalidArchiveTime(ref t, _) if t == "01/07/2024 00:00"));

        assert!(matches!(
            ArchiveResponse::from_json("{\"latitude\": \"north\"}"),
            Err(WeatherStatsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_hourly_block_is_empty() {
        let rows = ArchiveResponse::from_json(r#"{"latitude": 1.0, "longitude": 2.0}"#)
            .unwrap()
            .into_rows("X", Location::new(1.0, 2.0))
            .unwrap();
        assert!(rows.is_empty());
    }
}
