//! Configuration sections consumed by this crate.
//!
//! The structs deserialize from the host application's configuration file,
//! for example:
//!
//! ```yaml
//! logger:
//!   enable: true
//!   level: debug
//!   format: compact
//! mapping:
//!   resource: mappings/v1/brick_to_rec.json
//! ```
//!
//! Reading and merging configuration files is left to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top level configuration holding every section known to this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerSettings,
    #[serde(default)]
    pub mapping: MappingSettings,
}

/// Selects the mapping resource to load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSettings {
    /// Trailing part of the embedded resource name, e.g.
    /// `mappings/v1/brick_to_rec.json`.
    pub resource: Option<String>,
}

/// Logger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Installs a subscriber when `true`.
    #[serde(default = "default_true")]
    pub enable: bool,
    /// Level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    /// Raw filter directives replacing the level, e.g. `ontomap=trace`.
    #[serde(default)]
    pub override_filter: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enable: true,
            level: LogLevel::default(),
            format: LogFormat::default(),
            override_filter: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Config, LogFormat, LogLevel, LoggerSettings, MappingSettings};

    #[test]
    fn deserializes_full_config() {
        let config: Config = serde_yaml::from_str(
            r"
logger:
  enable: false
  level: debug
  format: json
mapping:
  resource: mappings/v1/brick_to_rec.json
",
        )
        .expect("valid config");

        assert_eq!(
            config.logger,
            LoggerSettings {
                enable: false,
                level: LogLevel::Debug,
                format: LogFormat::Json,
                override_filter: None,
            }
        );
        assert_eq!(
            config.mapping,
            MappingSettings {
                resource: Some("mappings/v1/brick_to_rec.json".to_string()),
            }
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = serde_yaml::from_str("{}").expect("valid config");
        assert!(config.logger.enable);
        assert_eq!(config.logger.level, LogLevel::Info);
        assert_eq!(config.logger.format, LogFormat::Compact);
        assert_eq!(config.mapping.resource, None);
    }

    #[test]
    fn level_displays_as_filter_directive() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Off.to_string(), "off");
    }
}
