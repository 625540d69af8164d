// src/config/settings.rs
use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const APP_DIR: &str = "ai-sahayak";
pub const ENV_PREFIX: &str = "SAHAYAK";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Pause before each simulated analysis step
    pub step_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    /// Fallback `tracing` filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            window_width: 1024.0,
            window_height: 768.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `<config_dir>/ai-sahayak/settings.*` if present, then
    /// `SAHAYAK_*` environment variables.
    pub fn load() -> Result<Self> {
        let mut builder = defaults()?;

        if let Some(path) = settings_path() {
            builder = builder.add_source(
                File::with_name(&path.to_string_lossy()).required(false)
            );
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [("window_width", self.window_width), ("window_height", self.window_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSetting(format!("{} must be positive, got {}", key, value)));
            }
        }
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let d = Settings::default();
    Ok(Config::builder()
        .set_default("step_delay_ms", d.step_delay_ms as i64)?
        .set_default("window_width", f64::from(d.window_width))?
        .set_default("window_height", f64::from(d.window_height))?
        .set_default("log_filter", d.log_filter)?)
}

/// Base name of the optional user settings file; the extension picks the format.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::from_builder(defaults().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.step_delay(), Duration::from_secs(1));
    }

    #[test]
    fn file_values_override_defaults() {
        let builder = defaults().unwrap().add_source(File::from_str(
            "step_delay_ms = 250\nlog_filter = \"debug\"",
            FileFormat::Toml,
        ));
        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.step_delay_ms, 250);
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.window_width, 1024.0);
    }

    #[test]
    fn environment_wins_over_file() {
        std::env::set_var("SAHAYAK_TEST_ENV_STEP_DELAY_MS", "10");
        let builder = defaults()
            .unwrap()
            .add_source(File::from_str("step_delay_ms = 250", FileFormat::Toml))
            .add_source(Environment::with_prefix("SAHAYAK_TEST_ENV").try_parsing(true));
        let settings = Settings::from_builder(builder).unwrap();
        std::env::remove_var("SAHAYAK_TEST_ENV_STEP_DELAY_MS");
        assert_eq!(settings.step_delay_ms, 10);
    }

    #[test]
    fn rejects_non_positive_window() {
        let builder = defaults()
            .unwrap()
            .add_source(File::from_str("window_height = 0.0", FileFormat::Toml));
        let err = Settings::from_builder(builder).unwrap_err();
        assert!(matches!(err, Error::InvalidSetting(_)));
    }
}
