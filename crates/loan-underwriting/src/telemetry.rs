use crate::config::{AppConfig, TelemetryConfig};
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })
        }
    }
}

/// Like [`build_filter`], but an unparseable level falls back to the default level.
fn filter_or_default(config: &TelemetryConfig) -> EnvFilter {
    build_filter(config).unwrap_or_else(|_| EnvFilter::new(AppConfig::DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber. Events go to stderr; stdout is reserved for decisions.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(build_filter(config)?)
}

/// Installs the global subscriber, replacing an invalid filter with the default level.
pub fn init_or_default(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    install(filter_or_default(config))
}

fn install(env_filter: EnvFilter) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
