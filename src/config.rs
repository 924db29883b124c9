//! Configuration management for GX Shell
//!
//! Presentation and throttling settings loaded from `gx.toml` with `GX_*`
//! environment overrides. Security limits are compiled in (see
//! [`crate::guard::policy`]) and cannot be changed here.

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::middleware::rate_limit::RateLimiter;

/// Default config file name, without extension
const DEFAULT_CONFIG_NAME: &str = "gx";

/// Environment variable naming an alternative config file
const CONFIG_PATH_VAR: &str = "GX_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShellConfig {
    /// Text printed before each command line
    pub prompt: String,

    /// Print the command summary on startup
    pub show_banner: bool,

    /// Directory the session starts in; defaults to the process working directory
    pub root_dir: Option<String>,

    /// Lines shown by gxhead / gxtail
    pub preview_lines: usize,

    /// Maximum text accepted by gxecho
    pub max_echo_length: usize,

    pub rate_limit_enabled: bool,
    pub rate_limit_max_commands: usize,
    pub rate_limit_window_secs: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "gx-shell> ".to_string(),
            show_banner: true,
            root_dir: None,
            preview_lines: 10,
            max_echo_length: 10_000,
            rate_limit_enabled: true,
            rate_limit_max_commands: 20,
            rate_limit_window_secs: 1,
        }
    }
}

impl ShellConfig {
    /// Load from `$GX_CONFIG` or `./gx.toml` (both optional) plus environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        Self::build(
            Self::defaults()?
                .add_source(file)
                .add_source(Environment::with_prefix("GX").try_parsing(true)),
        )
    }

    /// Load from an explicit file, without environment overrides
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Self::build(Self::defaults()?.add_source(File::with_name(path)))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let d = ShellConfig::default();
        Config::builder()
            .set_default("prompt", d.prompt)?
            .set_default("show_banner", d.show_banner)?
            .set_default("preview_lines", d.preview_lines as i64)?
            .set_default("max_echo_length", d.max_echo_length as i64)?
            .set_default("rate_limit_enabled", d.rate_limit_enabled)?
            .set_default("rate_limit_max_commands", d.rate_limit_max_commands as i64)?
            .set_default("rate_limit_window_secs", d.rate_limit_window_secs as i64)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ShellConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Starting directory for the session
    pub fn root_path(&self) -> std::io::Result<PathBuf> {
        match &self.root_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => std::env::current_dir(),
        }
    }

    /// Limiter configured from the rate_limit_* keys
    pub fn rate_limiter(&self) -> RateLimiter {
        if self.rate_limit_enabled {
            RateLimiter::new(
                self.rate_limit_max_commands,
                Duration::from_secs(self.rate_limit_window_secs),
            )
        } else {
            RateLimiter::disabled()
        }
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preview_lines == 0 {
            return Err(ConfigError::Message("preview_lines must be at least 1".into()));
        }

        if self.max_echo_length == 0 {
            return Err(ConfigError::Message(
                "max_echo_length must be at least 1".into(),
            ));
        }

        if self.rate_limit_enabled {
            if self.rate_limit_max_commands == 0 {
                return Err(ConfigError::Message(
                    "rate_limit_max_commands cannot be 0 while rate limiting is enabled".into(),
                ));
            }
            if self.rate_limit_window_secs == 0 {
                return Err(ConfigError::Message(
                    "rate_limit_window_secs cannot be 0 while rate limiting is enabled".into(),
                ));
            }
        }

        if let Some(dir) = &self.root_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::Message("root_dir cannot be empty".into()));
            }
        }

        Ok(())
    }
}
