use chrono::RoundingError;
use thiserror::Error;
use crate::manager_notify::errors::NotifyError;
use crate::manager_open_meteo::errors::OpenMeteoError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    File(#[from] std::io::Error),
    #[error("error parsing config file: {0}")]
    Document(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);

#[derive(Error, Debug)]
pub enum SnowfallError {
    #[error("malformed forecast timestamp '{0}': {1}")]
    Timestamp(String, chrono::ParseError),
    #[error("error truncating current time to hour: {0}")]
    Rounding(#[from] RoundingError),
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Errors that abandon a single check cycle
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("forecast fetch failed: {0}")]
    Fetch(#[from] OpenMeteoError),
    #[error("forecast evaluation failed: {0}")]
    Evaluation(#[from] SnowfallError),
    #[error("alert notification failed: {0}")]
    Notify(#[from] NotifyError),
}
