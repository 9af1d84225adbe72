//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use leveling_deferred::SimulatedHost;
use leveling_observability::{LogLevel, SessionId, StructuredLogger};
use leveling_storefront::{PageSession, Router};

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["leveling.toml", ".leveling.toml", "leveling.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            tracing::debug!(path = %config_path.display(), "loaded config");
                            return Some(config);
                        }
                        Err(e) => tracing::warn!(path = %config_path.display(), "ignoring config: {:#}", e),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// A fresh simulated host sized from the config, with optional overrides.
    pub fn host(&self, width: Option<f64>, height: Option<f64>) -> SimulatedHost {
        let mut viewport = self.config.viewport;
        viewport.width = width.unwrap_or(viewport.width);
        viewport.height = height.unwrap_or(viewport.height);
        SimulatedHost::new(viewport.to_viewport())
    }

    /// Session logger writing to stderr.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        StructuredLogger::new(SessionId::generate())
            .with_format(self.config.logging.format)
            .with_min_level(level)
    }

    /// Open a page session on `host`.
    pub fn open(&self, path: &str, host: SimulatedHost, record: bool) -> PageSession {
        PageSession::open(
            &Router::default(),
            path,
            host,
            self.config.deferred.clone(),
            self.logger(),
            record,
        )
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
