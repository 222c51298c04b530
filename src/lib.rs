//! Windowed temperature and precipitation statistics over hourly city weather
//! observations.
//!
//! The [`stats`] functions are the aggregation engine: pure, logging-free
//! computations over `&[ObservationRow]`. [`WeatherStats`] wires an
//! [`ObservationStore`] to the engine and returns request-shaped reports, and
//! the [`ingest`] module turns CSV files and Open-Meteo archive payloads into
//! rows.

mod config;
mod error;
mod filtering;
pub mod ingest;
pub mod stats;
mod store;
mod types;
mod utils;
mod weather_stats;

pub use config::StatsConfig;
pub use error::WeatherStatsError;
pub use weather_stats::*;

pub use filtering::{group_by_city, group_by_day, DateWindow, ObservationFilterExt};
pub use utils::round2;

pub use stats::global::compute_global_summary;
pub use stats::precipitation::compute_precipitation_summary;
pub use stats::temperature::{compute_temperature_summary, compute_threshold_hours};

pub use store::memory_store::InMemoryStore;
pub use store::{ObservationQuery, ObservationStore};

pub use types::observation::{Location, ObservationRow};
pub use types::summary::*;

pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::traits::any_date::AnyDate;
pub use types::traits::types::{Month, StartEndDate, Year};

pub use ingest::archive::{ArchiveHourly, ArchiveResponse};
pub use ingest::frame::{collect_observations, load_observation_csv, OBSERVATION_COLUMNS};
