use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::units::Units;

pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 7;

/// Persisted defaults. Every field is optional; command-line flags win.
///
/// Example TOML:
/// ```toml
/// city = "Berlin"
/// units = "imperial"
/// lang = "de"
/// days = 5
/// color = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,

    /// Two-letter language code, e.g. "de".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathercard", "weathercard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.days {
            if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
                bail!("days must be between {MIN_DAYS} and {MAX_DAYS} (got {days})");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_creates_directories() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("weathercard").join("config.toml");

        let cfg = Config {
            city: Some("München".into()),
            units: Some(Units::Imperial),
            lang: Some("de".into()),
            days: Some(3),
            color: Some(false),
        };
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn unset_fields_are_not_written() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let cfg = Config {
            city: Some("Oslo".into()),
            ..Default::default()
        };
        cfg.save_to(&path).expect("save");

        let written = fs::read_to_string(&path).expect("read");
        assert_eq!(written.trim(), r#"city = "Oslo""#);
    }

    #[test]
    fn partial_file_parses() {
        let cfg: Config = toml::from_str("units = \"metric\"\ndays = 7\n").expect("parse");
        assert_eq!(cfg.units, Some(Units::Metric));
        assert_eq!(cfg.days, Some(7));
        assert_eq!(cfg.city, None);
    }

    #[test]
    fn days_out_of_range_is_rejected() {
        for days in [0, 8, 30] {
            let cfg = Config {
                days: Some(days),
                ..Default::default()
            };
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().contains("between 1 and 7"), "{err}");
        }
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "days = 12\n").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        assert!(format!("{err:#}").contains("between 1 and 7"));
    }

    #[test]
    fn bad_units_fail_to_parse() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "units = \"kelvin\"\n").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
