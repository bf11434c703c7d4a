use crate::errors::{AppError, AppResult};
use crate::models::Preset;
use crate::utils::calendar::{DEFAULT_PUBLIC_HOLIDAYS, HolidayCalendar, parse_month_day};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_timeframe: Preset,
    #[serde(default = "default_public_holidays")]
    pub public_holidays: Vec<String>,
    #[serde(default = "default_show_utilization")]
    pub show_utilization: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_public_holidays() -> Vec<String> {
    DEFAULT_PUBLIC_HOLIDAYS.iter().map(|s| s.to_string()).collect()
}
fn default_show_utilization() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timeframe: Preset::default(),
            public_holidays: default_public_holidays(),
            show_utilization: default_show_utilization(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ravailability")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".ravailability")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ravailability.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Holiday calendar built from `public_holidays`.
    pub fn holiday_calendar(&self) -> AppResult<HolidayCalendar> {
        HolidayCalendar::from_month_days(&self.public_holidays)
    }

    /// Human-readable problems found in the configuration; empty when valid.
    pub fn check(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .public_holidays
            .iter()
            .filter_map(|h| parse_month_day(h).err().map(|e| e.to_string()))
            .collect();

        if self.separator_char.is_empty() {
            problems.push("separator_char must not be empty".to_string());
        }

        problems
    }
}
