//! Configuration
//!
//! Settings come from environment variables; anything unset falls back to a
//! default. The day calendar is validated when the config is turned into a
//! [`DayCalendar`].

use std::path::PathBuf;

use thiserror::Error;

use crate::nutrition::{DayCalendar, DEFAULT_LOCALE, DEFAULT_TIMEZONE};

pub const ENV_LOCALE: &str = "NUTRITRACK_LOCALE";
pub const ENV_TIMEZONE: &str = "NUTRITRACK_TIMEZONE";
pub const ENV_LABEL_FORMAT: &str = "NUTRITRACK_LABEL_FORMAT";
pub const ENV_DATA_PATH: &str = "NUTRITRACK_DATA_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown IANA timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid day label format: {0}")]
    InvalidLabelFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// BCP-47 tag, e.g. "pt-BR"
    pub locale: String,
    /// IANA zone, e.g. "America/Sao_Paulo"
    pub timezone: String,
    /// strftime pattern for day labels; `None` picks one for the locale
    pub label_format: Option<String>,
    /// JSON dataset file; `None` serves the demo dataset
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            label_format: None,
            data_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(locale) = non_empty(ENV_LOCALE) {
            config.locale = locale;
        }
        if let Some(timezone) = non_empty(ENV_TIMEZONE) {
            config.timezone = timezone;
        }
        if let Some(format) = non_empty(ENV_LABEL_FORMAT) {
            config.label_format = Some(format);
        }
        if let Some(path) = non_empty(ENV_DATA_PATH) {
            config.data_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn calendar(&self) -> Result<DayCalendar, ConfigError> {
        DayCalendar::new(&self.locale, &self.timezone, self.label_format.as_deref())
    }
}
