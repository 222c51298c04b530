//! Loading observations through polars: CSV files into a `LazyFrame`, and
//! frames into typed rows the engine can consume.

use crate::error::WeatherStatsError;
use crate::types::observation::ObservationRow;
use chrono::DateTime;
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Columns an observation frame must provide.
pub const OBSERVATION_COLUMNS: [&str; 6] = [
    "city",
    "datetime",
    "temperature",
    "precipitation",
    "latitude",
    "longitude",
];

/// Reads a headered observation CSV. Datetimes are parsed as naive UTC.
pub fn load_observation_csv(path: &Path) -> Result<LazyFrame, WeatherStatsError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|options| options.with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| WeatherStatsError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| WeatherStatsError::CsvRead(path.to_path_buf(), e))?;

    info!("Loaded {} observation records from {:?}", df.height(), path);
    Ok(df.lazy())
}

/// Collects `frame` into observation rows, in frame order.
///
/// # Errors
///
/// Returns [`WeatherStatsError::MissingColumn`] when one of
/// [`OBSERVATION_COLUMNS`] is absent and [`WeatherStatsError::MalformedRow`]
/// for a null cell or an out-of-range timestamp.
pub fn collect_observations(mut frame: LazyFrame) -> Result<Vec<ObservationRow>, WeatherStatsError> {
    let schema = frame.collect_schema()?;
    if let Some(missing) = OBSERVATION_COLUMNS
        .iter()
        .find(|name| schema.get(name).is_none())
    {
        return Err(WeatherStatsError::MissingColumn(missing.to_string()));
    }

    let df = frame
        .select([
            col("city").cast(DataType::String),
            col("datetime").cast(DataType::Datetime(TimeUnit::Milliseconds, None)),
            col("temperature").cast(DataType::Float64),
            col("precipitation").cast(DataType::Float64),
            col("latitude").cast(DataType::Float64),
            col("longitude").cast(DataType::Float64),
        ])
        .collect()?;

    let city = df.column("city")?.str()?;
    let datetime = df.column("datetime")?.datetime()?;
    let temperature = df.column("temperature")?.f64()?;
    let precipitation = df.column("precipitation")?.f64()?;
    let latitude = df.column("latitude")?.f64()?;
    let longitude = df.column("longitude")?.f64()?;

    (0..df.height())
        .map(|idx| {
            let missing = |column: &str| WeatherStatsError::MalformedRow {
                row: idx,
                message: format!("missing {}", column),
            };
            let millis = datetime.get(idx).ok_or_else(|| missing("datetime"))?;
            let timestamp =
                DateTime::from_timestamp_millis(millis).ok_or_else(|| WeatherStatsError::MalformedRow {
                    row: idx,
                    message: format!("timestamp {} ms is out of range", millis),
                })?;
            let city = city.get(idx).ok_or_else(|| missing("city"))?;
            if city.is_empty() {
                return Err(WeatherStatsError::MalformedRow {
                    row: idx,
                    message: "empty city".to_string(),
                });
            }

            Ok(ObservationRow {
                city: city.to_string(),
                timestamp,
                temperature: temperature.get(idx).ok_or_else(|| missing("temperature"))?,
                precipitation: precipitation
                    .get(idx)
                    .ok_or_else(|| missing("precipitation"))?,
                latitude: latitude.get(idx).ok_or_else(|| missing("latitude"))?,
                longitude: longitude.get(idx).ok_or_else(|| missing("longitude"))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_csv_to_rows() -> Result<(), Box<dyn std::error::Error>> {
        let file = csv_file(
            "city,datetime,temperature,precipitation,latitude,longitude\n\
             Madrid,2024-07-01 12:00:00,28.5,0,40.42,-3.7\n\
             Oslo,2024-07-01 13:00:00,18,1.1,59.91,10.75\n",
        );

        let rows = collect_observations(load_observation_csv(file.path())?)?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "Madrid");
        assert_eq!(rows[0].timestamp, Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap());
        assert_eq!(rows[0].temperature, 28.5);
        assert_eq!(rows[1].temperature, 18.0);
        assert_eq!(rows[1].precipitation, 1.1);
        assert_eq!(rows[1].longitude, 10.75);
        Ok(())
    }

    #[test]
    fn test_missing_column() -> Result<(), Box<dyn std::error::Error>> {
        let file = csv_file(
            "city,datetime,temperature,precipitation,latitude\n\
             Madrid,2024-07-01 12:00:00,28.5,0,40.42\n",
        );

        let err = collect_observations(load_observation_csv(file.path())?).unwrap_err();
        assert!(matches!(err, WeatherStatsError::MissingColumn(ref c) if c == "longitude"));
        Ok(())
    }

    #[test]
    fn test_null_cell_is_malformed() -> Result<(), Box<dyn std::error::Error>> {
        let file = csv_file(
            "city,datetime,temperature,precipitation,latitude,longitude\n\
             Madrid,2024-07-01 12:00:00,28.5,0,40.42,-3.7\n\
             Madrid,2024-07-01 13:00:00,,0,40.42,-3.7\n",
        );

        let err = collect_observations(load_observation_csv(file.path())?).unwrap_err();
        assert!(matches!(err, WeatherStatsError::MalformedRow { row: 1, .. }));
        Ok(())
    }

    #[test]
    fn test_unreadable_path() {
        // LazyFrame is not Debug, so unwrap_err is unavailable here
        let Err(err) = load_observation_csv(Path::new("/nonexistent/observations.csv")) else {
            panic!("expected a CsvRead error");
        };
        assert!(matches!(err, WeatherStatsError::CsvRead(..)));
    }
}
