use crate::filtering::group_by_city;
use crate::stats::precipitation::{count_wet_days, daily_precipitation_totals};
use crate::stats::{max_row, min_row};
use crate::types::observation::ObservationRow;
use crate::types::summary::{CitySummary, DayExtreme, GlobalSummary};
use crate::utils::{mean, round2, sum};

/// Rolls up every city present in `rows` independently.
///
/// No date window is applied here; callers narrow the rows beforehand if they
/// need one. Returns `None` for empty input.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weatherstats::{compute_global_summary, Location, ObservationRow};
///
/// let noon = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
/// let rows = vec![
///     ObservationRow::new("Madrid", noon, 31.0, 0.0, Location::new(40.42, -3.70)),
///     ObservationRow::new("Oslo", noon, 18.0, 1.2, Location::new(59.91, 10.75)),
/// ];
///
/// let summary = compute_global_summary(&rows).unwrap();
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary["Oslo"].precipitation_total, 1.2);
/// ```
pub fn compute_global_summary(rows: &[ObservationRow]) -> Option<GlobalSummary> {
    if rows.is_empty() {
        return None;
    }

    Some(
        group_by_city(rows)
            .into_iter()
            .filter_map(|(city, group)| {
                summarize_city(&group).map(|summary| (city.to_string(), summary))
            })
            .collect(),
    )
}

fn summarize_city(rows: &[&ObservationRow]) -> Option<CitySummary> {
    let first = rows.first()?;
    let start_date = rows.iter().map(|row| row.date()).min()?;
    let end_date = rows.iter().map(|row| row.date()).max()?;

    let temperature_max = max_row(rows, |row| row.temperature)?;
    let temperature_min = min_row(rows, |row| row.temperature)?;
    let precipitation_max = max_row(rows, |row| row.precipitation)?;

    Some(CitySummary {
        start_date,
        end_date,
        temperature_average: round2(mean(rows.iter().map(|row| row.temperature))?),
        temperature_max: day_extreme(temperature_max, temperature_max.temperature),
        temperature_min: day_extreme(temperature_min, temperature_min.temperature),
        precipitation_total: round2(sum(rows.iter().map(|row| row.precipitation))),
        days_with_precipitation: count_wet_days(&daily_precipitation_totals(
            rows.iter().copied(),
        )),
        precipitation_max: day_extreme(precipitation_max, precipitation_max.precipitation),
        location: first.location(),
    })
}

fn day_extreme(row: &ObservationRow, value: f64) -> DayExtreme {
    DayExtreme {
        value: round2(value),
        date: row.date(),
    }
}
