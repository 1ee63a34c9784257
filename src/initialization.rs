use std::env;
use std::time::Duration;
use log::info;
use crate::config::{load_config, Config, NotifierKind};
use crate::errors::{ConfigError, InitError};
use crate::logging::init_logging;
use crate::manager_mail::Mail;
use crate::manager_notify::errors::NotifyError;
use crate::manager_notify::{Desktop, LogLine, Notifier};
use crate::manager_open_meteo::OpenMeteo;

/// Environment variable naming an optional TOML configuration file
pub const CONFIG_ENV: &str = "SNOWWATCH_CONFIG";

/// Managers used by the worker loop
pub struct Mgr {
    pub open_meteo: OpenMeteo,
    pub notifier: Box<dyn Notifier>,
}

/// Loads configuration, sets up logging and instantiates managers
///
pub fn init() -> Result<(Config, Mgr), InitError> {
    let config = match env::var(CONFIG_ENV) {
        Ok(path) => load_config(&path)?,
        Err(_) => Config::default(),
    };

    init_logging(&config.general)?;
    info!("snowwatch version: {}", env!("CARGO_PKG_VERSION"));

    let open_meteo = OpenMeteo::new(
        config.geo_ref.lat,
        config.geo_ref.long,
        Duration::from_secs(config.open_meteo.timeout_secs));

    let notifier = new_notifier(&config)?;

    Ok((config, Mgr { open_meteo, notifier }))
}

/// Returns the notifier selected in the configuration
///
/// # Arguments
///
/// * 'config' - configuration holding notifier kind and any mail settings
fn new_notifier(config: &Config) -> Result<Box<dyn Notifier>, InitError> {
    let notifier: Box<dyn Notifier> = match config.notifier.kind {
        NotifierKind::Desktop => Box::new(Desktop::new("snowwatch")),
        NotifierKind::Log => Box::new(LogLine),
        NotifierKind::Mail => {
            let mail = config.mail.as_ref()
                .ok_or_else(|| ConfigError::Invalid("missing [mail] section".to_string()))?;
            Box::new(Mail::new(mail).map_err(NotifyError::from)?)
        }
    };
    info!("alerts are presented by the {:?} notifier", config.notifier.kind);

    Ok(notifier)
}
