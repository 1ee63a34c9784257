use chrono::{DurationRound, NaiveDateTime, TimeDelta};
use crate::errors::SnowfallError;
use crate::models::open_meteo_forecast::HourlySnowfall;

/// Number of forecasted hours summed into one accumulation
pub const WINDOW_HOURS: usize = 24;

/// Format of the timestamps in the hourly series, e.g. `2024-01-10T13:00`
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccumulationResult {
    pub total_snow_cm: f64,
    pub hours_counted: usize,
}

impl AccumulationResult {
    /// Returns true if the accumulated snowfall reaches the given threshold
    ///
    /// # Arguments
    ///
    /// * 'threshold_cm' - alert threshold in centimeters
    pub fn exceeds(&self, threshold_cm: f64) -> bool {
        self.total_snow_cm >= threshold_cm
    }
}

/// Sums snowfall over the next `WINDOW_HOURS` forecasted hours at or after `now`.
///
/// Entries without a snowfall value are skipped before their timestamp is looked at, and
/// they do not take up a slot in the window. Entries before the current hour are skipped.
/// The scan stops at the first entry that would exceed the window, so anything after it
/// has no influence on the result, malformed timestamps included.
///
/// # Arguments
///
/// * 'series' - hourly snowfall forecast, in the order given by the API
/// * 'now' - current time expressed in the same local time as the series
pub fn accumulate(series: &HourlySnowfall, now: NaiveDateTime) -> Result<AccumulationResult, SnowfallError> {
    let current_hour = now.duration_trunc(TimeDelta::hours(1))?;
    let mut result = AccumulationResult::default();

    for (time, snowfall) in series.time.iter().zip(series.snowfall.iter()) {
        if result.hours_counted >= WINDOW_HOURS {
            break;
        }
        let Some(snow_cm) = snowfall else { continue };

        let valid_time = parse_timestamp(time)?;
        if valid_time < current_hour {
            continue;
        }

        result.total_snow_cm += snow_cm;
        result.hours_counted += 1;
    }

    Ok(result)
}

/// Parses a forecast timestamp
///
/// # Arguments
///
/// * 'time' - timestamp on the form `YYYY-MM-DDTHH:MM`
pub fn parse_timestamp(time: &str) -> Result<NaiveDateTime, SnowfallError> {
    NaiveDateTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|e| SnowfallError::Timestamp(time.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    /// Builds an hourly series starting at `first`, one entry per value
    fn series_from(first: NaiveDateTime, values: &[Option<f64>]) -> HourlySnowfall {
        let time = (0..values.len())
            .map(|i| (first + TimeDelta::hours(i as i64)).format(TIME_FORMAT).to_string())
            .collect();

        HourlySnowfall { time, snowfall: values.to_vec() }
    }

    /// 48 hours where the first 12 have 0.5 cm and the rest none
    fn heavy_snow() -> Vec<Option<f64>> {
        (0..48).map(|i| Some(if i < 12 { 0.5 } else { 0.0 })).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn twelve_hours_of_heavy_snow_alerts() {
        let series = series_from(start(), &heavy_snow());

        let result = accumulate(&series, start()).unwrap();

        assert_close(result.total_snow_cm, 6.0);
        assert_eq!(result.hours_counted, 24);
        assert!(result.exceeds(5.0));
    }

    #[test]
    fn no_snow_does_not_alert() {
        let series = series_from(start(), &vec![Some(0.0); 48]);

        let result = accumulate(&series, start()).unwrap();

        assert_eq!(result.total_snow_cm, 0.0);
        assert_eq!(result.hours_counted, 24);
        assert!(!result.exceeds(5.0));
    }

    #[test]
    fn short_series_sums_what_is_available() {
        let series = series_from(start(), &vec![Some(1.0); 10]);

        let result = accumulate(&series, start()).unwrap();

        assert_close(result.total_snow_cm, 10.0);
        assert_eq!(result.hours_counted, 10);
    }

    #[test]
    fn missing_value_pulls_in_a_later_hour() {
        let mut values = heavy_snow();
        values[3] = None;
        values[24] = Some(2.0);
        let series = series_from(start(), &values);

        let result = accumulate(&series, start()).unwrap();

        // 11 * 0.5 from the first 12 hours, plus hour 24 which now falls inside the window
        assert_close(result.total_snow_cm, 7.5);
        assert_eq!(result.hours_counted, 24);
    }

    #[test]
    fn missing_value_is_excluded_from_sum_and_count() {
        let mut values = heavy_snow();
        values[5] = None;
        let series = series_from(start(), &values);

        let result = accumulate(&series, start()).unwrap();

        assert_close(result.total_snow_cm, 5.5);
        assert_eq!(result.hours_counted, 24);
    }

    #[test]
    fn past_hours_are_excluded() {
        let mut values = vec![Some(10.0); 6];
        values.extend(vec![Some(0.25); 30]);
        let series = series_from(start(), &values);
        let now = start() + TimeDelta::hours(6);

        let result = accumulate(&series, now).unwrap();

        assert_close(result.total_snow_cm, 6.0);
        assert_eq!(result.hours_counted, 24);
    }

    #[test]
    fn current_hour_is_included() {
        let series = series_from(start(), &[Some(3.0), Some(1.0), Some(1.0)]);
        let now = start() + TimeDelta::minutes(40);

        let result = accumulate(&series, now).unwrap();

        assert_close(result.total_snow_cm, 5.0);
        assert_eq!(result.hours_counted, 3);
    }

    #[test]
    fn entries_after_the_window_never_count() {
        let mut values = vec![Some(0.1); 24];
        values.push(Some(100.0));
        let series = series_from(start(), &values);

        let result = accumulate(&series, start()).unwrap();

        assert_close(result.total_snow_cm, 2.4);
        assert_eq!(result.hours_counted, WINDOW_HOURS);
    }

    #[test]
    fn comparison_uses_full_datetime_not_date() {
        // Same date as now but earlier hour must be skipped, next day earlier hour kept
        let series = HourlySnowfall {
            time: vec!["2024-01-10T08:00".to_string(), "2024-01-11T08:00".to_string()],
            snowfall: vec![Some(4.0), Some(1.0)],
        };
        let now = start() + TimeDelta::hours(12);

        let result = accumulate(&series, now).unwrap();

        assert_close(result.total_snow_cm, 1.0);
        assert_eq!(result.hours_counted, 1);
    }

    #[test]
    fn empty_series_is_zero() {
        let result = accumulate(&HourlySnowfall::default(), start()).unwrap();

        assert_eq!(result, AccumulationResult::default());
        assert!(!result.exceeds(5.0));
    }

    #[test]
    fn misaligned_series_uses_common_prefix() {
        let mut series = series_from(start(), &[Some(1.0), Some(1.0), Some(1.0)]);
        series.snowfall.truncate(2);

        let result = accumulate(&series, start()).unwrap();

        assert_eq!(result.hours_counted, 2);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let series = HourlySnowfall {
            time: vec!["2024-01-10T00:00".to_string(), "10/01/2024 01:00".to_string()],
            snowfall: vec![Some(1.0), Some(1.0)],
        };

        let err = accumulate(&series, start()).unwrap_err();

        assert!(matches!(err, SnowfallError::Timestamp(ref t, _) if t == "10/01/2024 01:00"));
    }

    #[test]
    fn malformed_timestamp_with_missing_value_is_ignored() {
        let series = HourlySnowfall {
            time: vec!["garbage".to_string(), "2024-01-10T01:00".to_string()],
            snowfall: vec![None, Some(2.0)],
        };

        let result = accumulate(&series, start()).unwrap();

        assert_close(result.total_snow_cm, 2.0);
        assert_eq!(result.hours_counted, 1);
    }

    #[test]
    fn evaluation_is_reproducible() {
        let series = series_from(start(), &heavy_snow());
        let now = start() + TimeDelta::minutes(15);

        assert_eq!(accumulate(&series, now).unwrap(), accumulate(&series, now).unwrap());
    }

    #[test]
    fn threshold_is_inclusive() {
        let result = AccumulationResult { total_snow_cm: 5.0, hours_counted: 24 };

        assert!(result.exceeds(5.0));
        assert!(!result.exceeds(5.01));
    }
}
