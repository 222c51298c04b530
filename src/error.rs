use chrono::NaiveDate;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherStatsError {
    /// The store held no observations for the request, or none survived the date window.
    #[error("No data found")]
    NoData,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("start_date must be before end_date (got {start} > {end})")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Required column '{0}' not found in observation frame")]
    MissingColumn(String),

    #[error("Malformed observation at row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("Archive hourly arrays differ in length: {times} times, {temperatures} temperatures, {precipitations} precipitation values")]
    ArchiveLengthMismatch {
        times: usize,
        temperatures: usize,
        precipitations: usize,
    },

    #[error("Invalid archive timestamp '{0}'")]
    InvalidArchiveTime(String, #[source] chrono::ParseError),

    #[error("Failed to parse archive JSON")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read observation CSV '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Failed processing observation frame: {0}")]
    Frame(#[from] PolarsError),
}
