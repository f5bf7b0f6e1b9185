//! Day calendar
//!
//! Turns log timestamps into day keys and human labels using a fixed
//! locale and IANA timezone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::config::ConfigError;
use crate::models::DayKey;

pub const DEFAULT_LOCALE: &str = "pt-BR";
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Locale and timezone used to resolve calendar days
#[derive(Debug, Clone)]
pub struct DayCalendar {
    locale_tag: String,
    locale: Locale,
    timezone: Tz,
    label_format: String,
}

/// Serializable view of the calendar settings
#[derive(Debug, Clone, Serialize)]
pub struct CalendarSettings {
    pub locale: String,
    pub timezone: String,
    pub label_format: String,
}

impl DayCalendar {
    /// Build a calendar from a BCP-47 locale tag and an IANA zone name
    ///
    /// `label_format` is a strftime pattern; when absent a default for the
    /// locale's language is used.
    pub fn new(
        locale_tag: &str,
        timezone: &str,
        label_format: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let normalized = normalize_locale_tag(locale_tag);
        let locale = Locale::try_from(normalized.as_str())
            .map_err(|_| ConfigError::UnknownLocale(locale_tag.to_string()))?;

        let timezone: Tz = timezone
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(timezone.to_string()))?;

        let label_format = match label_format {
            Some(fmt) => {
                if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
                    return Err(ConfigError::InvalidLabelFormat(fmt.to_string()));
                }
                fmt.to_string()
            }
            None => default_label_format(&normalized).to_string(),
        };

        Ok(Self {
            locale_tag: normalized.replace('_', "-"),
            locale,
            timezone,
            label_format,
        })
    }

    /// English labels, UTC days
    pub fn utc() -> Self {
        Self {
            locale_tag: "en-US".to_string(),
            locale: Locale::en_US,
            timezone: Tz::UTC,
            label_format: default_label_format("en_US").to_string(),
        }
    }

    pub fn day_key(&self, timestamp: &DateTime<Utc>) -> DayKey {
        DayKey::new(timestamp.with_timezone(&self.timezone).date_naive())
    }

    /// Weekday, day of month and month, e.g. "segunda-feira, 1 de janeiro"
    pub fn day_label(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format_localized(&self.label_format, self.locale)
            .to_string()
    }

    pub fn weekday(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format_localized("%A", self.locale)
            .to_string()
    }

    /// Local "HH:MM" for the meal table
    pub fn time_label(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format("%H:%M")
            .to_string()
    }

    /// Local "YYYY-MM-DD HH:MM"
    pub fn timestamp_label(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    pub fn settings(&self) -> CalendarSettings {
        CalendarSettings {
            locale: self.locale_tag.clone(),
            timezone: self.timezone.name().to_string(),
            label_format: self.label_format.clone(),
        }
    }
}

impl Default for DayCalendar {
    fn default() -> Self {
        Self {
            locale_tag: DEFAULT_LOCALE.to_string(),
            locale: Locale::pt_BR,
            timezone: chrono_tz::America::Sao_Paulo,
            label_format: default_label_format("pt_BR").to_string(),
        }
    }
}

/// "pt-br" -> "pt_BR"
fn normalize_locale_tag(tag: &str) -> String {
    let mut parts = tag.trim().split(|c: char| c == '-' || c == '_');
    let language = parts.next().unwrap_or_default().to_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => format!("{}_{}", language, region.to_uppercase()),
        _ => language,
    }
}

fn default_label_format(normalized_tag: &str) -> &'static str {
    match normalized_tag.split('_').next().unwrap_or_default() {
        "pt" | "es" => "%A, %-d de %B",
        "en" => "%A, %B %-d",
        _ => "%A, %-d %B",
    }
}
