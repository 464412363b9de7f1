use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use meridian_types::UiOptions;

use crate::extraction::DEFAULT_EXTRACTION_RATE;
use crate::playback::DEFAULT_SCALE_MS;

/// Optional user configuration, read once at startup from
/// `~/.meridian/config.toml`. Every field has a default; a missing file is
/// not an error.
#[derive(Debug, Default, Deserialize)]
pub struct MeridianConfig {
    pub app: Option<AppConfig>,
    pub demo: Option<DemoConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and progress markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable spinner animation and progress sweep motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Milliseconds of real time per nominal duration unit of a step.
    pub playback_scale_ms: Option<u64>,
    /// Seconds between simulated dashboard-metric updates.
    pub metrics_tick_secs: Option<u64>,
    /// Document-extraction sweep rate, percent per second.
    pub extraction_rate: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl MeridianConfig {
    /// `~/.meridian/config.toml`, if a home directory can be resolved.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".meridian").join("config.toml"))
    }

    /// Load the config file if it exists. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn playback_scale_ms(&self) -> u64 {
        self.demo
            .as_ref()
            .and_then(|d| d.playback_scale_ms)
            .unwrap_or(DEFAULT_SCALE_MS)
    }

    #[must_use]
    pub fn metrics_tick_secs(&self) -> u64 {
        self.demo
            .as_ref()
            .and_then(|d| d.metrics_tick_secs)
            .unwrap_or(5)
    }

    #[must_use]
    pub fn extraction_rate(&self) -> f64 {
        self.demo
            .as_ref()
            .and_then(|d| d.extraction_rate)
            .unwrap_or(DEFAULT_EXTRACTION_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_absent() {
        let config = MeridianConfig::default();
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.playback_scale_ms(), DEFAULT_SCALE_MS);
        assert_eq!(config.metrics_tick_secs(), 5);
    }

    #[test]
    fn parses_partial_toml() {
        let config: MeridianConfig = toml::from_str(
            r#"
            [app]
            high_contrast = true

            [demo]
            playback_scale_ms = 10
            "#,
        )
        .unwrap();
        assert!(config.ui_options().high_contrast);
        assert!(!config.ui_options().ascii_only);
        assert_eq!(config.playback_scale_ms(), 10);
        assert_eq!(config.metrics_tick_secs(), 5);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let err = MeridianConfig::load_from(path.clone()).unwrap_err();
        assert!(err.to_string().contains(path.display().to_string().as_str()));
    }

    #[test]
    fn load_from_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            MeridianConfig::load_from(path),
            Err(ConfigError::Read { .. })
        ));
    }
}
