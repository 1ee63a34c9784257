use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {m}{n}";

/// Builds the log4rs configuration given the general settings
///
/// # Arguments
///
/// * 'general' - log file path, log level and whether to log to stdout
pub fn log_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)
            .map_err(|e| LoggingError(format!("{}: {}", log_path, e)))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();

        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    builder
        .build(root.build(general.log_level))
        .map_err(|e| LoggingError(e.to_string()))
}

/// Initializes the global logger
///
/// # Arguments
///
/// * 'general' - log file path, log level and whether to log to stdout
pub fn init_logging(general: &General) -> Result<(), LoggingError> {
    let config = log_config(general)?;
    log4rs::init_config(config).map_err(|e| LoggingError(e.to_string()))?;

    Ok(())
}
