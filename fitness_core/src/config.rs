//! Configuration file support for fittrack.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fittrack/config.toml`.

use crate::progression::DEFAULT_XP_PER_MINUTE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub gamification: GamificationConfig,

    #[serde(default)]
    pub nutrition: NutritionConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// XP award configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GamificationConfig {
    #[serde(default = "default_xp_per_minute")]
    pub xp_per_minute: u64,
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            xp_per_minute: default_xp_per_minute(),
        }
    }
}

/// Daily calorie target configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Multiplier applied to BMR for the daily target
    #[serde(default = "default_activity_multiplier")]
    pub activity_multiplier: f64,

    /// Target used when the profile cannot produce a BMR
    #[serde(default = "default_fallback_daily_calories")]
    pub fallback_daily_calories: u32,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            activity_multiplier: default_activity_multiplier(),
            fallback_daily_calories: default_fallback_daily_calories(),
        }
    }
}

// Default value functions
fn home_dir_or_cwd() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| home_dir_or_cwd().join(".local/share"));
    base.join("fittrack")
}

fn default_xp_per_minute() -> u64 {
    DEFAULT_XP_PER_MINUTE
}

fn default_activity_multiplier() -> f64 {
    1.5
}

fn default_fallback_daily_calories() -> u32 {
    2000
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject values the calculators cannot use
    pub fn validate(&self) -> Result<()> {
        if !(self.nutrition.activity_multiplier > 0.0) {
            return Err(Error::Config(format!(
                "nutrition.activity_multiplier must be positive, got {}",
                self.nutrition.activity_multiplier
            )));
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_dir_or_cwd().join(".config"));
        base.join("fittrack").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gamification.xp_per_minute, 5);
        assert_eq!(config.nutrition.activity_multiplier, 1.5);
        assert_eq!(config.nutrition.fallback_daily_calories, 2000);
        assert!(config.data.data_dir.ends_with("fittrack"));
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.gamification.xp_per_minute = 8;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gamification.xp_per_minute, 8);
        assert_eq!(loaded.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[nutrition]
fallback_daily_calories = 1800
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.nutrition.fallback_daily_calories, 1800);
        assert_eq!(config.nutrition.activity_multiplier, 1.5); // default
        assert_eq!(config.gamification.xp_per_minute, 5); // default
    }

    #[test]
    fn test_invalid_multiplier_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[nutrition]\nactivity_multiplier = 0.0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
