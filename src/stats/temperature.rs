use crate::config::StatsConfig;
use crate::filtering::{group_by_day, DateWindow, ObservationFilterExt};
use crate::stats::{max_row, min_row};
use crate::types::observation::ObservationRow;
use crate::types::summary::{InstantExtreme, TemperatureSummary, ThresholdHours};
use crate::utils::{mean, round2};
use chrono::NaiveDate;

/// Temperature statistics for the rows whose calendar date lies in
/// `[start_date, end_date]`.
///
/// Returns `None` when the window holds no rows.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weatherstats::{compute_temperature_summary, Location, ObservationRow};
///
/// let madrid = Location::new(40.42, -3.70);
/// let rows = vec![
///     ObservationRow::new("Madrid", Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(), 20.0, 0.0, madrid),
///     ObservationRow::new("Madrid", Utc.with_ymd_and_hms(2024, 7, 1, 15, 0, 0).unwrap(), 30.0, 0.0, madrid),
/// ];
///
/// let summary = compute_temperature_summary(&rows, None, None).unwrap();
/// assert_eq!(summary.average, 25.0);
/// assert_eq!(summary.max.value, 30.0);
/// assert_eq!(summary.min.value, 20.0);
/// ```
pub fn compute_temperature_summary(
    rows: &[ObservationRow],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Option<TemperatureSummary> {
    let filtered = rows.filter_dates(DateWindow::new(start_date, end_date));
    let average = mean(filtered.iter().map(|row| row.temperature))?;
    let max = max_row(&filtered, |row| row.temperature)?;
    let min = min_row(&filtered, |row| row.temperature)?;

    let average_by_day = group_by_day(filtered.iter().copied())
        .into_iter()
        .filter_map(|(date, day)| {
            mean(day.iter().map(|row| row.temperature)).map(|avg| (date, round2(avg)))
        })
        .collect();

    Some(TemperatureSummary {
        average: round2(average),
        average_by_day,
        max: instant_extreme(max),
        min: instant_extreme(min),
    })
}

/// Counts hours strictly hotter than `config.hot_threshold` and strictly
/// colder than `config.cold_threshold` inside the window.
pub fn compute_threshold_hours(
    rows: &[ObservationRow],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    config: &StatsConfig,
) -> Option<ThresholdHours> {
    let filtered = rows.filter_dates(DateWindow::new(start_date, end_date));
    if filtered.is_empty() {
        return None;
    }

    Some(ThresholdHours {
        hours_above_threshold: filtered
            .iter()
            .filter(|row| row.temperature > config.hot_threshold)
            .count(),
        hours_below_threshold: filtered
            .iter()
            .filter(|row| row.temperature < config.cold_threshold)
            .count(),
    })
}

fn instant_extreme(row: &ObservationRow) -> InstantExtreme {
    InstantExtreme {
        value: round2(row.temperature),
        date_time: row.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_rows::at;
    use chrono::{TimeZone, Utc};

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    #[test]
    fn test_single_row() {
        let rows = vec![at("Madrid", (7, 1, 12), 28.5, 0.0)];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        let noon = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(summary.max, InstantExtreme { value: 28.5, date_time: noon });
        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.average, 28.5);
        assert_eq!(summary.average_by_day.len(), 1);
    }

    #[test]
    fn test_two_rows_same_day() {
        let rows = vec![
            at("Madrid", (7, 1, 8), 20.0, 0.0),
            at("Madrid", (7, 1, 16), 30.0, 0.0),
        ];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        assert_eq!(summary.average, 25.0);
        assert_eq!(summary.max.value, 30.0);
        assert_eq!(summary.min.value, 20.0);
        assert_eq!(summary.average_by_day.len(), 1);
        assert_eq!(summary.average_by_day[&date(7, 1)], 25.0);
    }

    #[test]
    fn test_average_is_over_rows_not_days() {
        // Day 1 has three readings, day 2 a single one
        let rows = vec![
            at("Madrid", (7, 1, 0), 10.0, 0.0),
            at("Madrid", (7, 1, 1), 10.0, 0.0),
            at("Madrid", (7, 1, 2), 10.0, 0.0),
            at("Madrid", (7, 2, 0), 30.0, 0.0),
        ];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        assert_eq!(summary.average, 15.0);
        assert_eq!(summary.average_by_day[&date(7, 1)], 10.0);
        assert_eq!(summary.average_by_day[&date(7, 2)], 30.0);
    }

    #[test]
    fn test_hand_computed_average_and_rounding() {
        let rows = vec![
            at("Madrid", (7, 1, 0), 21.3, 0.0),
            at("Madrid", (7, 1, 1), 22.4, 0.0),
            at("Madrid", (7, 2, 0), 19.05, 0.0),
        ];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        // (21.3 + 22.4 + 19.05) / 3 = 20.9166...
        assert_eq!(summary.average, 20.92);
        // (21.3 + 22.4) / 2 = 21.85
        assert_eq!(summary.average_by_day[&date(7, 1)], 21.85);
    }

    #[test]
    fn test_extremes_first_seen_wins_on_ties() {
        let rows = vec![
            at("Madrid", (7, 2, 10), 31.0, 0.0),
            at("Madrid", (7, 1, 10), 31.0, 0.0),
            at("Madrid", (7, 3, 4), 12.0, 0.0),
            at("Madrid", (7, 1, 4), 12.0, 0.0),
        ];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        assert_eq!(summary.max.date_time, rows[0].timestamp);
        assert_eq!(summary.min.date_time, rows[2].timestamp);
    }

    #[test]
    fn test_window_narrows_rows() {
        let rows = vec![
            at("Madrid", (6, 30, 23), 40.0, 0.0),
            at("Madrid", (7, 1, 0), 20.0, 0.0),
            at("Madrid", (7, 1, 23), 22.0, 0.0),
            at("Madrid", (7, 2, 0), -5.0, 0.0),
        ];
        let summary =
            compute_temperature_summary(&rows, Some(date(7, 1)), Some(date(7, 1))).unwrap();

        assert_eq!(summary.average, 21.0);
        assert_eq!(summary.max.value, 22.0);
        assert_eq!(summary.min.value, 20.0);
        assert_eq!(summary.average_by_day.keys().copied().collect::<Vec<_>>(), vec![date(7, 1)]);
    }

    #[test]
    fn test_empty_and_inverted_window_yield_none() {
        assert!(compute_temperature_summary(&[], None, None).is_none());

        let rows = vec![at("Madrid", (7, 1, 0), 20.0, 0.0)];
        assert!(compute_temperature_summary(&rows, Some(date(7, 2)), Some(date(7, 1))).is_none());
        assert!(compute_temperature_summary(&rows, Some(date(8, 1)), None).is_none());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let rows = vec![
            at("Madrid", (7, 1, 0), 20.123, 0.0),
            at("Madrid", (7, 2, 0), 25.987, 0.0),
        ];
        let first = compute_temperature_summary(&rows, None, None);
        let second = compute_temperature_summary(&rows, None, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nan_propagates_into_average() {
        let rows = vec![
            at("Madrid", (7, 1, 0), f64::NAN, 0.0),
            at("Madrid", (7, 1, 1), 18.0, 0.0),
        ];
        let summary = compute_temperature_summary(&rows, None, None).unwrap();

        assert!(summary.average.is_nan());
        assert_eq!(summary.max.value, 18.0);
    }

    #[test]
    fn test_threshold_hours() {
        let rows = vec![
            at("Madrid", (7, 1, 12), 30.0, 0.0),
            at("Madrid", (7, 1, 13), 30.5, 0.0),
            at("Madrid", (7, 1, 14), 0.0, 0.0),
            at("Madrid", (7, 1, 15), -0.1, 0.0),
            at("Madrid", (7, 2, 15), 35.0, 0.0),
        ];
        let config = StatsConfig::default();

        let hours = compute_threshold_hours(&rows, None, Some(date(7, 1)), &config).unwrap();
        assert_eq!(hours.hours_above_threshold, 1);
        assert_eq!(hours.hours_below_threshold, 1);

        let custom = StatsConfig::builder().hot_threshold(25.0).cold_threshold(1.0).build();
        let hours = compute_threshold_hours(&rows, None, None, &custom).unwrap();
        assert_eq!(hours.hours_above_threshold, 3);
        assert_eq!(hours.hours_below_threshold, 2);

        assert!(compute_threshold_hours(&rows, Some(date(8, 1)), None, &config).is_none());
    }
}
