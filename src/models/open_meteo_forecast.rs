use std::borrow::Cow;
use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer};

/// Hourly snowfall series as returned by Open-Meteo when requested with `hourly=snowfall`.
///
/// The two vectors are aligned by index. Either may be missing or null in the document,
/// in which case it deserializes as empty.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct HourlySnowfall {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub snowfall: Vec<Option<f64>>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct OpenMeteoForecast {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i32>,
    pub hourly: Option<HourlySnowfall>,
}

impl OpenMeteoForecast {
    /// Returns the hourly series, or an empty one if the document carried none
    ///
    pub fn series(&self) -> Cow<'_, HourlySnowfall> {
        match &self.hourly {
            Some(hourly) => Cow::Borrowed(hourly),
            None => Cow::Owned(HourlySnowfall::default()),
        }
    }

    /// Expresses the given instant in the forecast location's local time.
    ///
    /// Open-Meteo reports `timezone=auto` timestamps without offset, so the offset in the
    /// document is what makes them comparable to the current time. If the document lacks
    /// an offset, the machine's local time is used instead.
    ///
    /// # Arguments
    ///
    /// * 'utc_now' - the instant to convert
    pub fn local_time(&self, utc_now: DateTime<Utc>) -> NaiveDateTime {
        match self.utc_offset_seconds {
            Some(offset) => utc_now.naive_utc() + TimeDelta::seconds(offset as i64),
            None => utc_now.with_timezone(&Local).naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn deserializes_nulls_and_extra_fields() {
        let json = r#"{
            "latitude": 44.64,
            "longitude": -63.57,
            "generationtime_ms": 0.05,
            "utc_offset_seconds": -14400,
            "timezone": "America/Halifax",
            "hourly_units": {"time": "iso8601", "snowfall": "cm"},
            "hourly": {
                "time": ["2024-01-10T00:00", "2024-01-10T01:00", "2024-01-10T02:00"],
                "snowfall": [0.0, null, 1.4]
            }
        }"#;

        let forecast: OpenMeteoForecast = serde_json::from_str(json).unwrap();
        let series = forecast.series();

        assert_eq!(forecast.timezone.as_deref(), Some("America/Halifax"));
        assert_eq!(series.time.len(), 3);
        assert_eq!(series.snowfall, vec![Some(0.0), None, Some(1.4)]);
    }

    #[test]
    fn missing_hourly_gives_empty_series() {
        let forecast: OpenMeteoForecast = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        assert_eq!(*forecast.series(), HourlySnowfall::default());

        let forecast: OpenMeteoForecast = serde_json::from_str(r#"{"hourly": {"time": []}}"#).unwrap();
        assert!(forecast.series().snowfall.is_empty());
    }

    #[test]
    fn null_arrays_give_empty_series() {
        let json = r#"{"hourly": {"time": null, "snowfall": null}}"#;

        let forecast: OpenMeteoForecast = serde_json::from_str(json).unwrap();

        assert_eq!(*forecast.series(), HourlySnowfall::default());
    }

    #[test]
    fn series_borrows_the_document() {
        let forecast = OpenMeteoForecast { hourly: Some(HourlySnowfall::default()), ..Default::default() };

        assert!(matches!(forecast.series(), Cow::Borrowed(_)));
    }

    #[test]
    fn local_time_applies_document_offset() {
        let forecast = OpenMeteoForecast { utc_offset_seconds: Some(-14400), ..Default::default() };
        let utc_now = Utc.with_ymd_and_hms(2024, 1, 10, 15, 30, 0).unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(11, 30, 0).unwrap();
        assert_eq!(forecast.local_time(utc_now), expected);
    }
}
