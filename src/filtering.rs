use crate::types::observation::ObservationRow;
use crate::types::traits::any_date::AnyDate;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// An inclusive calendar-date window. A missing bound is unbounded on that side.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weatherstats::{DateWindow, Month};
///
/// let july = DateWindow::from_period(Month::new(7, 2024)).unwrap();
/// assert!(july.contains(NaiveDate::from_ymd_opt(2024, 7, 31).unwrap()));
/// assert!(!july.contains(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Window covering a whole period (a day, a `Month`, a `Year`, or a date string).
    pub fn from_period(period: impl AnyDate) -> Option<Self> {
        let range = period.get_date_range()?;
        Some(Self::new(Some(range.start), Some(range.end)))
    }

    /// Time of day plays no role: only the calendar date is compared.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

pub trait ObservationFilterExt {
    /// Rows whose calendar date falls inside `window`, in input order.
    /// A window with `start > end` matches nothing.
    fn filter_dates(&self, window: DateWindow) -> Vec<&ObservationRow>;
}

impl ObservationFilterExt for [ObservationRow] {
    fn filter_dates(&self, window: DateWindow) -> Vec<&ObservationRow> {
        self.iter().filter(|row| window.contains(row.date())).collect()
    }
}

/// Partitions rows by calendar date. Only dates present in the input become
/// keys; each group keeps its rows in input order.
pub fn group_by_day<'a>(
    rows: impl IntoIterator<Item = &'a ObservationRow>,
) -> BTreeMap<NaiveDate, Vec<&'a ObservationRow>> {
    let mut groups: BTreeMap<NaiveDate, Vec<&ObservationRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.date()).or_default().push(row);
    }
    groups
}

/// Partitions rows by city name, each group in input order.
pub fn group_by_city<'a>(
    rows: impl IntoIterator<Item = &'a ObservationRow>,
) -> BTreeMap<&'a str, Vec<&'a ObservationRow>> {
    let mut groups: BTreeMap<&str, Vec<&ObservationRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.city.as_str()).or_default().push(row);
    }
    groups
}
