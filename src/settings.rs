use std::{fmt, fs, io, path::PathBuf};

use chrono::TimeDelta;
use directories::ProjectDirs;

use crate::{countdown::DEFAULT_THRESHOLD_SECS, prayer::Language};

fn default_threshold_secs() -> i64 {
    DEFAULT_THRESHOLD_SECS
}

fn default_interval_secs() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default)]
    pub table: Option<PathBuf>,
    #[serde(default = "default_threshold_secs")]
    pub threshold_secs: i64,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default)]
    pub language: Language,
    /// Command run with the prayer's name when a prayer time arrives.
    #[serde(default)]
    pub on_prayer: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table: None,
            threshold_secs: default_threshold_secs(),
            interval_secs: default_interval_secs(),
            language: Language::default(),
            on_prayer: None,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Io(PathBuf, io::Error),
    Toml(PathBuf, toml::de::Error),
    Threshold(i64),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            SettingsError::Toml(path, e) => write!(f, "invalid settings in {}: {e}", path.display()),
            SettingsError::Threshold(secs) => {
                write!(f, "threshold of {secs} seconds is negative or too large")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(_, e) => Some(e),
            SettingsError::Toml(_, e) => Some(e),
            SettingsError::Threshold(_) => None,
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// An explicit path must exist. Without one, the platform config file is
    /// used if present, otherwise the defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, SettingsError> {
        let path = match explicit {
            Some(path) => path,
            None => match default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    log::debug!("No settings file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("Reading settings from {}", path.display());
        let source = fs::read_to_string(&path).map_err(|e| SettingsError::Io(path.clone(), e))?;
        let settings = Self::from_toml(&source).map_err(|e| SettingsError::Toml(path, e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values that cannot be used as a proximity window.
    pub fn validate(&self) -> Result<(), SettingsError> {
        match TimeDelta::try_seconds(self.threshold_secs) {
            Some(_) if self.threshold_secs >= 0 => Ok(()),
            _ => Err(SettingsError::Threshold(self.threshold_secs)),
        }
    }

    /// Out-of-range values saturate instead of failing.
    pub fn threshold(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.threshold_secs.max(0)).unwrap_or(TimeDelta::MAX)
    }
}

pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "adhan", "adhan-countdown")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}
