use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::AssessmentThresholds;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub advice: AdviceSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub assessment: AssessmentSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl ServerSettings {
    /// Worker thread count; zero is raised to one
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or(4).max(1)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Artificial delays applied before answers are returned
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceSettings {
    #[serde(default)]
    pub response_delay_ms: u64,
    #[serde(default)]
    pub qa_delay_ms: u64,
}

impl AdviceSettings {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn qa_delay(&self) -> Duration {
        Duration::from_millis(self.qa_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_entries: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            max_entries: default_max_sessions(),
        }
    }
}

fn default_session_ttl() -> u64 { 3600 }
fn default_max_sessions() -> u64 { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentSettings {
    #[serde(default = "default_underweight_ratio")]
    pub underweight_ratio: f64,
    #[serde(default = "default_overweight_ratio")]
    pub overweight_ratio: f64,
    #[serde(default = "default_sleep_deficit")]
    pub sleep_deficit_hours: f64,
    #[serde(default = "default_sleep_excess")]
    pub sleep_excess_hours: f64,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            underweight_ratio: default_underweight_ratio(),
            overweight_ratio: default_overweight_ratio(),
            sleep_deficit_hours: default_sleep_deficit(),
            sleep_excess_hours: default_sleep_excess(),
        }
    }
}

fn default_underweight_ratio() -> f64 { 0.85 }
fn default_overweight_ratio() -> f64 { 1.15 }
fn default_sleep_deficit() -> f64 { 2.0 }
fn default_sleep_excess() -> f64 { 3.0 }

impl From<&AssessmentSettings> for AssessmentThresholds {
    fn from(settings: &AssessmentSettings) -> Self {
        AssessmentThresholds {
            underweight_ratio: settings.underweight_ratio,
            overweight_ratio: settings.overweight_ratio,
            sleep_deficit_hours: settings.sleep_deficit_hours,
            sleep_excess_hours: settings.sleep_excess_hours,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BABYCARE__)
    /// 5. `PORT`, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BABYCARE__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_platform_overrides(settings, std::env::var("PORT").ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// Environment variables and `PORT` apply on top, as with [`Settings::load`].
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_from_with_port(path, std::env::var("PORT").ok())
    }

    fn load_from_with_port<P: AsRef<Path>>(
        path: P,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_platform_overrides(settings, port)?.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BABYCARE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply overrides from unprefixed platform variables
fn apply_platform_overrides(settings: Config, port: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = port {
        let port: u16 = port
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT {:?}: {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
