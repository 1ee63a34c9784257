use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

impl Default for GeoRef {
    /// Halifax, Nova Scotia
    fn default() -> Self {
        GeoRef { lat: 44.6488, long: -63.5752 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AlertParameters {
    pub threshold_cm: f64,
    pub poll_interval_secs: u64,
}

impl Default for AlertParameters {
    fn default() -> Self {
        AlertParameters { threshold_cm: 5.0, poll_interval_secs: 4 * 3600 }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OpenMeteoParameters {
    pub timeout_secs: u64,
}

impl Default for OpenMeteoParameters {
    fn default() -> Self {
        OpenMeteoParameters { timeout_secs: 30 }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Desktop,
    Mail,
    Log,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NotifierParameters {
    pub kind: NotifierKind,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MailParameters {
    pub smtp_user: String,
    pub smtp_password: String,
    pub smtp_endpoint: String,
    pub from: String,
    pub to: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

impl Default for General {
    fn default() -> Self {
        General { log_path: None, log_level: LevelFilter::Info, log_to_stdout: true }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub alert: AlertParameters,
    pub open_meteo: OpenMeteoParameters,
    pub notifier: NotifierParameters,
    pub mail: Option<MailParameters>,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items.
/// Items missing in the file keep their built-in defaults.
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates a configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration as a toml document
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&config.geo_ref.lat) || !(-180.0..=180.0).contains(&config.geo_ref.long) {
        return Err(ConfigError::Invalid(
            format!("coordinates out of range: {}/{}", config.geo_ref.lat, config.geo_ref.long)));
    }
    if !config.alert.threshold_cm.is_finite() || config.alert.threshold_cm < 0.0 {
        return Err(ConfigError::Invalid(format!("bad threshold: {}", config.alert.threshold_cm)));
    }
    if config.alert.poll_interval_secs == 0 {
        return Err(ConfigError::Invalid("poll interval must be positive".to_string()));
    }
    if config.open_meteo.timeout_secs == 0 {
        return Err(ConfigError::Invalid("forecast request timeout must be positive".to_string()));
    }
    if config.notifier.kind == NotifierKind::Mail && config.mail.is_none() {
        return Err(ConfigError::Invalid("mail notifier selected but [mail] section is missing".to_string()));
    }

    Ok(())
}
