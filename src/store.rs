//! The observation store boundary. The aggregation engine never talks to a
//! store itself; callers query one and hand the rows to the engine.

pub mod memory_store;

use crate::error::WeatherStatsError;
use crate::filtering::DateWindow;
use crate::types::observation::ObservationRow;
use bon::Builder;
use chrono::NaiveDate;

/// Coarse row selection applied by a store: optional city and inclusive
/// calendar-date bounds.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weatherstats::ObservationQuery;
///
/// let query = ObservationQuery::builder()
///     .city("Madrid")
///     .start_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
///     .build();
/// assert_eq!(query.city.as_deref(), Some("Madrid"));
/// assert!(query.end_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct ObservationQuery {
    #[builder(into)]
    pub city: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ObservationQuery {
    pub fn window(&self) -> DateWindow {
        DateWindow::new(self.start_date, self.end_date)
    }

    pub fn matches(&self, row: &ObservationRow) -> bool {
        self.city.as_deref().map_or(true, |city| row.city == city)
            && self.window().contains(row.date())
    }
}

pub trait ObservationStore {
    /// Rows matching `query`.
    fn query(&self, query: &ObservationQuery) -> Result<Vec<ObservationRow>, WeatherStatsError>;

    /// Stores `rows` and returns how many were added.
    fn insert(&mut self, rows: Vec<ObservationRow>) -> Result<usize, WeatherStatsError>;
}
