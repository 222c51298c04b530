//! Request-level entry point: queries an [`ObservationStore`], runs the
//! aggregation engine over the rows, and wraps the result in the document
//! shape returned to API consumers.
//!
//! A request that matches no observations fails with
//! [`WeatherStatsError::NoData`] rather than producing a zeroed document.

use crate::config::StatsConfig;
use crate::error::WeatherStatsError;
use crate::filtering::DateWindow;
use crate::ingest::archive::ArchiveResponse;
use crate::stats::global::compute_global_summary;
use crate::stats::precipitation::compute_precipitation_summary;
use crate::stats::temperature::{compute_temperature_summary, compute_threshold_hours};
use crate::store::{ObservationQuery, ObservationStore};
use crate::types::observation::{Location, ObservationRow};
use crate::types::summary::{GlobalSummary, PrecipitationSummary, TemperatureSummary, ThresholdHours};
use crate::types::traits::any_date::AnyDate;
use crate::types::traits::types::StartEndDate;
use bon::bon;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;

/// `{"temperature": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReport {
    pub temperature: TemperatureSummary,
}

/// `{"precipitation": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationReport {
    pub precipitation: PrecipitationSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub hot_threshold: f64,
    pub cold_threshold: f64,
    #[serde(flatten)]
    pub hours: ThresholdHours,
}

/// `{"status": "success", "records_added": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub status: &'static str,
    pub records_added: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Statistics service over an observation store.
///
/// Date arguments are strings as they arrive in a request: `YYYY-MM-DD`, or
/// `YYYY-MM` to start at the first / end at the last day of that month.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weatherstats::{InMemoryStore, Location, ObservationRow, WeatherStats, WeatherStatsError};
///
/// let madrid = Location::new(40.42, -3.70);
/// let store = InMemoryStore::with_rows(vec![
///     ObservationRow::new("Madrid", Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(), 28.5, 0.0, madrid),
/// ]);
/// let stats = WeatherStats::new(store);
///
/// let report = stats.temperature().city("Madrid").call()?;
/// assert_eq!(report.temperature.average, 28.5);
///
/// let missing = stats.temperature().city("Madrid").start_date("2024-08-01").call();
/// assert!(matches!(missing, Err(WeatherStatsError::NoData)));
/// # Ok::<(), WeatherStatsError>(())
/// ```
pub struct WeatherStats<S: ObservationStore> {
    store: S,
    config: StatsConfig,
}

#[bon]
impl<S: ObservationStore> WeatherStats<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, StatsConfig::default())
    }

    pub fn with_config(store: S, config: StatsConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Temperature summary for an optional city over an optional date window.
    ///
    /// # Errors
    ///
    /// [`WeatherStatsError::InvalidDate`] for an unparsable date,
    /// [`WeatherStatsError::NoData`] when nothing matches.
    #[builder]
    pub fn temperature(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] start_date: Option<String>,
        #[builder(into)] end_date: Option<String>,
    ) -> Result<TemperatureReport, WeatherStatsError> {
        let query = build_query(city, start_date, end_date)?;
        let rows = self.store.query(&query)?;
        let summary = compute_temperature_summary(&rows, query.start_date, query.end_date)
            .ok_or_else(|| no_data("temperature", &query))?;
        info!("Calculated temperature stats for {:?}", query.city);
        Ok(TemperatureReport {
            temperature: summary,
        })
    }

    /// Precipitation summary for an optional city over an optional date window.
    ///
    /// # Errors
    ///
    /// [`WeatherStatsError::InvalidDate`] for an unparsable date,
    /// [`WeatherStatsError::NoData`] when nothing matches.
    #[builder]
    pub fn precipitation(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] start_date: Option<String>,
        #[builder(into)] end_date: Option<String>,
    ) -> Result<PrecipitationReport, WeatherStatsError> {
        let query = build_query(city, start_date, end_date)?;
        let rows = self.store.query(&query)?;
        let summary = compute_precipitation_summary(&rows, query.start_date, query.end_date)
            .ok_or_else(|| no_data("precipitation", &query))?;
        info!("Calculated precipitation stats for {:?}", query.city);
        Ok(PrecipitationReport {
            precipitation: summary,
        })
    }

    /// Per-city rollups. The city and date arguments only narrow the rows
    /// fetched from the store.
    ///
    /// # Errors
    ///
    /// [`WeatherStatsError::InvalidDate`] for an unparsable date,
    /// [`WeatherStatsError::NoData`] when nothing matches.
    #[builder]
    pub fn global(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] start_date: Option<String>,
        #[builder(into)] end_date: Option<String>,
    ) -> Result<GlobalSummary, WeatherStatsError> {
        let query = build_query(city, start_date, end_date)?;
        let rows = self.store.query(&query)?;
        let summary = compute_global_summary(&rows).ok_or_else(|| no_data("global", &query))?;
        info!("Calculated global stats for {} cities", summary.len());
        Ok(summary)
    }

    /// Hours above / below the configured temperature thresholds.
    ///
    /// # Errors
    ///
    /// [`WeatherStatsError::InvalidDate`] for an unparsable date,
    /// [`WeatherStatsError::NoData`] when nothing matches.
    #[builder]
    pub fn thresholds(
        &self,
        #[builder(into)] city: Option<String>,
        #[builder(into)] start_date: Option<String>,
        #[builder(into)] end_date: Option<String>,
    ) -> Result<ThresholdReport, WeatherStatsError> {
        let query = build_query(city, start_date, end_date)?;
        let rows = self.store.query(&query)?;
        let hours = compute_threshold_hours(&rows, query.start_date, query.end_date, &self.config)
            .ok_or_else(|| no_data("threshold", &query))?;
        Ok(ThresholdReport {
            hot_threshold: self.config.hot_threshold,
            cold_threshold: self.config.cold_threshold,
            hours,
        })
    }

    /// Stores the hours of an archive `payload` for `city` that fall inside
    /// `[start_date, end_date]`.
    ///
    /// # Errors
    ///
    /// [`WeatherStatsError::InvalidDate`] for an unparsable date,
    /// [`WeatherStatsError::InvertedDateRange`] when `start_date > end_date`,
    /// and any decoding error of the payload. Nothing is stored on error.
    #[builder]
    pub fn load(
        &mut self,
        #[builder(into)] city: String,
        #[builder(into)] start_date: String,
        #[builder(into)] end_date: String,
        payload: ArchiveResponse,
        location: Location,
    ) -> Result<LoadReport, WeatherStatsError> {
        let start = parse_bound(start_date, |range| range.start)?;
        let end = parse_bound(end_date, |range| range.end)?;
        if start > end {
            warn!("Rejected load for {}: {} is after {}", city, start, end);
            return Err(WeatherStatsError::InvertedDateRange { start, end });
        }

        let window = DateWindow::new(Some(start), Some(end));
        let decoded = payload.into_rows(&city, location)?;
        let fetched = decoded.len();
        let rows: Vec<ObservationRow> = decoded
            .into_iter()
            .filter(|row| window.contains(row.date()))
            .collect();
        if rows.len() < fetched {
            debug!(
                "Dropped {} archive hours outside {} to {}",
                fetched - rows.len(),
                start,
                end
            );
        }

        let records_added = self.store.insert(rows)?;
        info!(
            "Loaded {} records for {} ({} to {})",
            records_added, city, start, end
        );
        Ok(LoadReport {
            status: "success",
            records_added,
        })
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus { status: "ok" }
    }
}

fn build_query(
    city: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<ObservationQuery, WeatherStatsError> {
    Ok(ObservationQuery {
        city,
        start_date: start_date
            .map(|raw| parse_bound(raw, |range| range.start))
            .transpose()?,
        end_date: end_date
            .map(|raw| parse_bound(raw, |range| range.end))
            .transpose()?,
    })
}

fn parse_bound(
    raw: String,
    pick: impl Fn(StartEndDate) -> NaiveDate,
) -> Result<NaiveDate, WeatherStatsError> {
    raw.as_str()
        .get_date_range()
        .map(pick)
        .ok_or(WeatherStatsError::InvalidDate(raw))
}

fn no_data(kind: &str, query: &ObservationQuery) -> WeatherStatsError {
    warn!("No data found for {} stats, query {:?}", kind, query);
    WeatherStatsError::NoData
}
