use crate::filtering::{group_by_day, DateWindow, ObservationFilterExt};
use crate::stats::max_row;
use crate::types::observation::ObservationRow;
use crate::types::summary::{DayExtreme, PrecipitationSummary};
use crate::utils::{mean, round2, sum};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Precipitation statistics for the rows whose calendar date lies in
/// `[start_date, end_date]`.
///
/// `max` is the single wettest hour (reported with its day), not the wettest
/// day, and `average` is the mean hourly reading. Returns `None` when the window
/// holds no rows.
pub fn compute_precipitation_summary(
    rows: &[ObservationRow],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Option<PrecipitationSummary> {
    let filtered = rows.filter_dates(DateWindow::new(start_date, end_date));
    let average = mean(filtered.iter().map(|row| row.precipitation))?;
    let max = max_row(&filtered, |row| row.precipitation)?;

    let daily_totals = daily_precipitation_totals(filtered.iter().copied());

    Some(PrecipitationSummary {
        total: round2(sum(filtered.iter().map(|row| row.precipitation))),
        days_with_precipitation: count_wet_days(&daily_totals),
        total_by_day: daily_totals
            .into_iter()
            .map(|(date, total)| (date, round2(total)))
            .collect(),
        max: DayExtreme {
            value: round2(max.precipitation),
            date: max.date(),
        },
        average: round2(average),
    })
}

/// Unrounded precipitation sum per calendar day present in `rows`.
pub(crate) fn daily_precipitation_totals<'a>(
    rows: impl IntoIterator<Item = &'a ObservationRow>,
) -> BTreeMap<NaiveDate, f64> {
    group_by_day(rows)
        .into_iter()
        .map(|(date, day)| (date, sum(day.iter().map(|row| row.precipitation))))
        .collect()
}

/// Days whose total is strictly positive. Zero and negative totals do not count.
pub(crate) fn count_wet_days(daily_totals: &BTreeMap<NaiveDate, f64>) -> usize {
    daily_totals.values().filter(|&&total| total > 0.0).count()
}
