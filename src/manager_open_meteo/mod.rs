pub mod errors;

use std::time::Duration;
use log::debug;
use ureq::Agent;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::models::open_meteo_forecast::OpenMeteoForecast;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Anything that can deliver a snowfall forecast for one check cycle
pub trait ForecastSource {
    fn forecast(&self) -> Result<OpenMeteoForecast, OpenMeteoError>;
}

/// Struct for fetching hourly snowfall forecasts from Open-Meteo
pub struct OpenMeteo {
    agent: Agent,
    url: String,
    lat: f64,
    long: f64,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to get forecasts for
    /// * 'long' - longitude for the point to get forecasts for
    /// * 'timeout' - upper limit for a whole request, connect and body read included
    pub fn new(lat: f64, long: f64, timeout: Duration) -> OpenMeteo {
        OpenMeteo::with_url(FORECAST_URL, lat, long, timeout)
    }

    /// Returns an OpenMeteo struct that fetches forecasts from the given endpoint
    ///
    /// # Arguments
    ///
    /// * 'url' - forecast endpoint, e.g. `https://api.open-meteo.com/v1/forecast`
    /// * 'lat' - latitude for the point to get forecasts for
    /// * 'long' - longitude for the point to get forecasts for
    /// * 'timeout' - upper limit for a whole request, connect and body read included
    pub fn with_url(url: &str, lat: f64, long: f64, timeout: Duration) -> OpenMeteo {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        let agent = config.into();

        Self { agent, url: url.to_string(), lat, long }
    }

    /// Retrieves the hourly snowfall forecast for the configured point.
    ///
    /// Timestamps in the returned forecast are in the local time of the point
    /// (`timezone=auto`), and the document carries the offset needed to compare them
    /// with the current time.
    pub fn get_forecast(&self) -> Result<OpenMeteoForecast, OpenMeteoError> {
        let lat = format!("{:0.4}", self.lat);
        let long = format!("{:0.4}", self.long);

        let json = self.agent
            .get(&self.url)
            .query("latitude", &lat)
            .query("longitude", &long)
            .query("hourly", "snowfall")
            .query("timezone", "auto")
            .call()?
            .body_mut()
            .read_to_string()?;

        debug!("open-meteo response of {} bytes for {}/{}", json.len(), lat, long);

        Ok(serde_json::from_str(&json)?)
    }
}

impl ForecastSource for OpenMeteo {
    fn forecast(&self) -> Result<OpenMeteoForecast, OpenMeteoError> {
        self.get_forecast()
    }
}
