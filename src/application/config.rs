use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Threshold band overrides. Fields mirror `ThresholdSet`; anything missing
/// in the file falls back to the clinical defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub heart_rate_critical_low: i32,
    pub heart_rate_critical_high: i32,
    pub heart_rate_warning_low: i32,
    pub heart_rate_warning_high: i32,
    pub systolic_critical_low: i32,
    pub systolic_critical_high: i32,
    pub systolic_warning_low: i32,
    pub systolic_warning_high: i32,
    pub diastolic_critical_low: i32,
    pub diastolic_critical_high: i32,
    pub diastolic_warning_low: i32,
    pub diastolic_warning_high: i32,
    pub temperature_critical_low: f64,
    pub temperature_critical_high: f64,
    pub temperature_warning_low: f64,
    pub temperature_warning_high: f64,
    pub spo2_critical_min: i32,
    pub spo2_warning_min: i32,
    pub carboxyhemoglobin_critical_max: f64,
    pub carboxyhemoglobin_warning_max: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let defaults = ThresholdSet::default();
        Self {
            heart_rate_critical_low: defaults.heart_rate_critical_low,
            heart_rate_critical_high: defaults.heart_rate_critical_high,
            heart_rate_warning_low: defaults.heart_rate_warning_low,
            heart_rate_warning_high: defaults.heart_rate_warning_high,
            systolic_critical_low: defaults.systolic_critical_low,
            systolic_critical_high: defaults.systolic_critical_high,
            systolic_warning_low: defaults.systolic_warning_low,
            systolic_warning_high: defaults.systolic_warning_high,
            diastolic_critical_low: defaults.diastolic_critical_low,
            diastolic_critical_high: defaults.diastolic_critical_high,
            diastolic_warning_low: defaults.diastolic_warning_low,
            diastolic_warning_high: defaults.diastolic_warning_high,
            temperature_critical_low: defaults.temperature_critical_low,
            temperature_critical_high: defaults.temperature_critical_high,
            temperature_warning_low: defaults.temperature_warning_low,
            temperature_warning_high: defaults.temperature_warning_high,
            spo2_critical_min: defaults.spo2_critical_min,
            spo2_warning_min: defaults.spo2_warning_min,
            carboxyhemoglobin_critical_max: defaults.carboxyhemoglobin_critical_max,
            carboxyhemoglobin_warning_max: defaults.carboxyhemoglobin_warning_max,
        }
    }
}

/// Database storage path (tilde-expanded at point of use).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    "~/.local/share/pulsewatch/records.db".into()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("pulsewatch").join("config.toml"))
    }
}

impl From<&ThresholdConfig> for ThresholdSet {
    fn from(config: &ThresholdConfig) -> Self {
        // Warning bands are forced inside the critical bands so an inverted
        // override can't make a critical value read as merely borderline.
        Self {
            heart_rate_critical_low: config.heart_rate_critical_low,
            heart_rate_critical_high: config.heart_rate_critical_high,
            heart_rate_warning_low: config.heart_rate_warning_low.max(config.heart_rate_critical_low),
            heart_rate_warning_high: config.heart_rate_warning_high.min(config.heart_rate_critical_high),
            systolic_critical_low: config.systolic_critical_low,
            systolic_critical_high: config.systolic_critical_high,
            systolic_warning_low: config.systolic_warning_low.max(config.systolic_critical_low),
            systolic_warning_high: config.systolic_warning_high.min(config.systolic_critical_high),
            diastolic_critical_low: config.diastolic_critical_low,
            diastolic_critical_high: config.diastolic_critical_high,
            diastolic_warning_low: config.diastolic_warning_low.max(config.diastolic_critical_low),
            diastolic_warning_high: config.diastolic_warning_high.min(config.diastolic_critical_high),
            temperature_critical_low: config.temperature_critical_low,
            temperature_critical_high: config.temperature_critical_high,
            temperature_warning_low: config.temperature_warning_low.max(config.temperature_critical_low),
            temperature_warning_high: config.temperature_warning_high.min(config.temperature_critical_high),
            spo2_critical_min: config.spo2_critical_min,
            spo2_warning_min: config.spo2_warning_min.max(config.spo2_critical_min),
            carboxyhemoglobin_critical_max: config.carboxyhemoglobin_critical_max,
            carboxyhemoglobin_warning_max: config
                .carboxyhemoglobin_warning_max
                .min(config.carboxyhemoglobin_critical_max),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_matches_clinical_defaults() {
        let config = AppConfig::default();
        let thresholds = ThresholdSet::from(&config.thresholds);
        assert_eq!(thresholds, ThresholdSet::default());
        assert_eq!(config.database.path, "~/.local/share/pulsewatch/records.db");
    }

    #[test]
    fn serde_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let deserialized: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(
            deserialized.thresholds.heart_rate_critical_low,
            config.thresholds.heart_rate_critical_low
        );
        assert_eq!(deserialized.database.path, config.database.path);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("parse empty toml");
        assert_eq!(config.thresholds.spo2_warning_min, 94);
        assert_eq!(config.database.path, "~/.local/share/pulsewatch/records.db");
    }

    #[test]
    fn partial_toml_fills_missing_with_defaults() {
        let toml_str = r#"
[thresholds]
heart_rate_warning_high = 95

[database]
path = "/tmp/test.db"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse partial toml");
        assert_eq!(config.thresholds.heart_rate_warning_high, 95);
        assert_eq!(config.thresholds.heart_rate_critical_high, 110);
        assert_eq!(config.database.path, "/tmp/test.db");
    }

    #[test]
    fn load_from_file() {
        let toml_str = r#"
[thresholds]
spo2_warning_min = 95
"#;
        let mut tmpfile = tempfile::NamedTempFile::new().expect("create tempfile");
        tmpfile
            .write_all(toml_str.as_bytes())
            .expect("write tmpfile");

        let config = AppConfig::load_from(tmpfile.path()).expect("load from file");
        assert_eq!(config.thresholds.spo2_warning_min, 95);
    }

    #[test]
    fn save_to_creates_file_and_directories() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("subdir").join("config.toml");

        let config = AppConfig::default();
        config.save_to(&path).expect("save_to");

        assert!(path.exists());
        let reloaded = AppConfig::load_from(&path).expect("reload");
        assert_eq!(reloaded.database.path, config.database.path);
    }

    #[test]
    fn load_or_create_creates_default_when_missing() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("pulsewatch").join("config.toml");

        assert!(!path.exists());
        let config = AppConfig::load_or_create(&path).expect("load_or_create");

        assert!(path.exists());
        assert_eq!(config.thresholds.spo2_critical_min, 90);
    }

    #[test]
    fn load_from_nonexistent_file_fails() {
        let dir = tempfile::tempdir().expect("create tempdir");
        let missing = dir.path().join("missing-config.toml");
        let result = AppConfig::load_from(&missing);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_fails() {
        let mut tmpfile = tempfile::NamedTempFile::new().expect("create tempfile");
        tmpfile
            .write_all(b"this is not valid toml [[[")
            .expect("write");

        let result = AppConfig::load_from(tmpfile.path());
        assert!(result.is_err());
    }

    #[test]
    fn inverted_warning_bands_are_clamped_into_critical_bands() {
        let config = ThresholdConfig {
            heart_rate_warning_low: 40,  // below critical_low 55
            heart_rate_warning_high: 130, // above critical_high 110
            spo2_warning_min: 80,        // below critical_min 90
            carboxyhemoglobin_warning_max: 20.0, // above critical_max 10.0
            ..ThresholdConfig::default()
        };
        let thresholds = ThresholdSet::from(&config);
        assert_eq!(thresholds.heart_rate_warning_low, 55);
        assert_eq!(thresholds.heart_rate_warning_high, 110);
        assert_eq!(thresholds.spo2_warning_min, 90);
        assert!((thresholds.carboxyhemoglobin_warning_max - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_thresholds_flow_through() {
        let config = ThresholdConfig {
            temperature_warning_high: 37.2,
            ..ThresholdConfig::default()
        };
        let thresholds = ThresholdSet::from(&config);
        assert!((thresholds.temperature_warning_high - 37.2).abs() < f64::EPSILON);
        assert!((thresholds.temperature_critical_high - 38.5).abs() < f64::EPSILON);
    }
}
