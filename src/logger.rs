//! Tracing subscriber bootstrap for hosts that do not install their own.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggerSettings};

/// Builds the filter directives for the configured settings.
///
/// `override_filter` wins over `level` when both are present.
#[must_use]
pub fn filter_directives(settings: &LoggerSettings) -> String {
    settings
        .override_filter
        .clone()
        .unwrap_or_else(|| settings.level.to_string())
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over the configured directives. Returns `false`
/// when logging is disabled or a global subscriber is already installed.
pub fn init(settings: &LoggerSettings) -> bool {
    if !settings.enable {
        return false;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(settings)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = match settings.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::{filter_directives, init};
    use crate::config::{LogLevel, LoggerSettings};

    #[test]
    fn directives_follow_level() {
        let settings = LoggerSettings {
            level: LogLevel::Debug,
            ..LoggerSettings::default()
        };
        assert_eq!(filter_directives(&settings), "debug");
    }

    #[test]
    fn override_filter_wins() {
        let settings = LoggerSettings {
            level: LogLevel::Error,
            override_filter: Some("ontomap=trace".to_string()),
            ..LoggerSettings::default()
        };
        assert_eq!(filter_directives(&settings), "ontomap=trace");
    }

    #[test]
    fn disabled_logger_installs_nothing() {
        let settings = LoggerSettings {
            enable: false,
            ..LoggerSettings::default()
        };
        assert!(!init(&settings));
    }
}
