//! CLI configuration.

use anyhow::{Context, Result};
use leveling_core::DeferredConfig;
use leveling_deferred::Viewport;
use leveling_observability::LogFormat;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Deferred rendering tuning.
    #[serde(default)]
    pub deferred: DeferredConfig,

    /// Simulated viewport.
    #[serde(default)]
    pub viewport: ViewportConfig,

    /// Session log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format by file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        let config: Self = if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .deferred
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }
}

/// Viewport used for simulated sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    1280.0
}

fn default_height() -> f64 {
    800.0
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl ViewportConfig {
    pub fn to_viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Session log settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log line format (json or human).
    #[serde(default = "default_format")]
    pub format: LogFormat,
}

fn default_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::parse("leveling.toml", "").unwrap();

        assert_eq!(config.deferred, DeferredConfig::default());
        assert_eq!(config.viewport, ViewportConfig::default());
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_toml_overrides() {
        let content = r#"
[deferred]
content_delay_ms = 250

[deferred.proximity]
root_margin = 100.0

[viewport]
width = 375.0

[logging]
format = "json"
"#;
        let config = CliConfig::parse("leveling.toml", content).unwrap();

        assert_eq!(config.deferred.content_delay_ms, 250);
        assert_eq!(config.deferred.proximity.root_margin, 100.0);
        assert_eq!(config.deferred.help_reset_ms, 3000);
        assert_eq!(config.viewport.width, 375.0);
        assert_eq!(config.viewport.height, 800.0);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse("leveling.json", r#"{"viewport": {"height": 667}}"#).unwrap();

        assert_eq!(config.viewport.height, 667.0);
        assert_eq!(config.viewport.width, 1280.0);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let content = "[deferred.proximity]\nthreshold = 1.5\n";
        let err = CliConfig::parse("leveling.toml", content).unwrap_err();

        assert!(format!("{:#}", err).contains("threshold"));
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let err = CliConfig::parse("broken.toml", "viewport = 3").unwrap_err();

        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
