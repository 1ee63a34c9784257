use std::thread;
use std::time::Duration;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use crate::config::Config;
use crate::errors::WorkerError;
use crate::initialization::Mgr;
use crate::manager_notify::Notifier;
use crate::manager_open_meteo::ForecastSource;
use crate::snowfall::{accumulate, AccumulationResult, WINDOW_HOURS};

/// Result of one completed check cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleOutcome {
    pub accumulation: AccumulationResult,
    pub alerted: bool,
}

/// Runs the check cycle forever, sleeping the configured interval between cycles.
/// A failing cycle is logged and the next one is attempted as scheduled.
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'mgr' - forecast source and notifier
pub fn run(config: &Config, mgr: &Mgr) {
    let interval = Duration::from_secs(config.alert.poll_interval_secs);
    info!("monitoring snowfall >= {:.1} cm at {}/{}, checking every {} minutes",
          config.alert.threshold_cm, config.geo_ref.lat, config.geo_ref.long, interval.as_secs() / 60);

    loop {
        match check_snowfall(&mgr.open_meteo, &mgr.notifier, config.alert.threshold_cm, Utc::now()) {
            Ok(outcome) if outcome.alerted => {
                info!("alert presented for {:.2} cm", outcome.accumulation.total_snow_cm);
            },
            Ok(_) => {},
            Err(e) => error!("{}", e),
        }

        thread::sleep(interval);
    }
}

/// Fetches a forecast, sums the snowfall over the coming window and presents an alert
/// if the threshold is reached. Every crossing alerts, regardless of earlier cycles.
///
/// # Arguments
///
/// * 'source' - where to get the forecast from
/// * 'notifier' - how to present an alert
/// * 'threshold_cm' - alert threshold in centimeters
/// * 'utc_now' - the current time
pub fn check_snowfall<S, N>(source: &S, notifier: &N, threshold_cm: f64, utc_now: DateTime<Utc>)
                            -> Result<CycleOutcome, WorkerError>
where
    S: ForecastSource + ?Sized,
    N: Notifier + ?Sized,
{
    let forecast = source.forecast()?;
    let now = forecast.local_time(utc_now);
    debug!("forecast for {:?}/{:?} in {}, local time {}",
           forecast.latitude, forecast.longitude, forecast.timezone.as_deref().unwrap_or("machine time zone"), now);

    let accumulation = accumulate(&forecast.series(), now)?;
    info!("forecasted snowfall next {} hours: {:.2} cm over {} hours with data",
          WINDOW_HOURS, accumulation.total_snow_cm, accumulation.hours_counted);

    let alerted = accumulation.exceeds(threshold_cm);
    if alerted {
        notifier.present(accumulation.total_snow_cm)?;
    }

    Ok(CycleOutcome { accumulation, alerted })
}
