// Copyright (c) 2025 FundTrack Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file {0} is not valid JSON: {1}")]
    Malformed(String, String),
}

/// The persisted settings document. Loaded once at startup and handed to
/// commands as an explicit value; every settings-changing action writes the
/// whole document back through [`Settings::save`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub monthly_budget: Decimal,
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub report_export_path: String,
    /// YYYY-MM period the monthly report was last generated in.
    #[serde(default)]
    pub last_report_period: Option<String>,
}

fn default_currency_suffix() -> String {
    "AED".to_string()
}

fn default_theme_name() -> String {
    "dark".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            display_name: String::new(),
            monthly_budget: Decimal::ZERO,
            currency_suffix: default_currency_suffix(),
            theme_name: default_theme_name(),
            report_export_path: String::new(),
            last_report_period: None,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("io.fundtrack", "FundTrack", "fundtrack")
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("settings.json"))
}

impl Settings {
    /// Missing file means defaults; a file that exists but does not parse is
    /// surfaced as [`ConfigError::Malformed`] rather than swallowed.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Read settings at {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Malformed(path.display().to_string(), e.to_string()))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Create settings dir {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("Write settings at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            display_name: "Alice".to_string(),
            monthly_budget: Decimal::new(250000, 2),
            currency_suffix: "EUR".to_string(),
            theme_name: "light".to_string(),
            report_export_path: "/tmp/reports".to_string(),
            last_report_period: Some("2024-01".to_string()),
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.display_name, "Alice");
        assert_eq!(loaded.monthly_budget, Decimal::new(250000, 2));
        assert_eq!(loaded.last_report_period.as_deref(), Some("2024-01"));
    }

    #[test]
    fn load_returns_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert!(s.display_name.is_empty());
        assert_eq!(s.currency_suffix, "AED");
        assert!(s.last_report_period.is_none());
    }

    #[test]
    fn load_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"display_name": "Bob"}"#).unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s.display_name, "Bob");
        assert_eq!(s.theme_name, "dark");
        assert_eq!(s.monthly_budget, Decimal::ZERO);
    }

    #[test]
    fn load_rejects_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
