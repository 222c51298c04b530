use crate::error::WeatherStatsError;
use crate::store::{ObservationQuery, ObservationStore};
use crate::types::observation::ObservationRow;
use log::{debug, info};

/// An `ObservationStore` held in memory.
///
/// Rows are kept ordered by timestamp; rows sharing a timestamp keep their
/// insertion order. Query results come back in that order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: Vec<ObservationRow>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = ObservationRow>) -> Self {
        let mut store = Self::new();
        store.insert_many(rows);
        store
    }

    /// Adds rows and returns how many were inserted. Nothing is deduplicated.
    pub fn insert_many(&mut self, rows: impl IntoIterator<Item = ObservationRow>) -> usize {
        let before = self.rows.len();
        self.rows.extend(rows);
        // stable sort keeps insertion order among equal timestamps
        self.rows.sort_by_key(|row| row.timestamp);
        let inserted = self.rows.len() - before;
        info!(
            "{} records inserted into store ({} total)",
            inserted,
            self.rows.len()
        );
        inserted
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ObservationStore for InMemoryStore {
    fn query(&self, query: &ObservationQuery) -> Result<Vec<ObservationRow>, WeatherStatsError> {
        let rows: Vec<ObservationRow> = self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect();
        debug!("Store query {:?} matched {} rows", query, rows.len());
        Ok(rows)
    }

    fn insert(&mut self, rows: Vec<ObservationRow>) -> Result<usize, WeatherStatsError> {
        Ok(self.insert_many(rows))
    }
}
