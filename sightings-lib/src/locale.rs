//! Locale-aware date display

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::ConfigError;

/// Environment variables consulted for the display locale, highest priority first.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Locale-independent date format used for `<time datetime="...">`.
pub const MACHINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats the machine-readable form of a date (ISO 8601, `YYYY-MM-DD`).
///
/// The output never depends on the display locale.
pub fn machine_date(date: NaiveDate) -> String {
    date.format(MACHINE_DATE_FORMAT).to_string()
}

/// Display format for short dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sightings_lib::DateLocale;
///
/// let date = NaiveDate::from_ymd_opt(2020, 9, 18).unwrap();
/// assert_eq!(DateLocale::EnUs.format_date(date), "9/18/2020");
/// assert_eq!(DateLocale::De.format_date(date), "18.9.2020");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateLocale {
    /// `9/18/2020`
    #[default]
    EnUs,
    /// `18/09/2020`
    EnGb,
    /// `2020-09-18`
    EnCa,
    /// `2020-09-18`
    Iso,
    /// `18.9.2020`
    De,
    /// `18/09/2020`
    Fr,
    /// `2020/9/18`
    Ja,
}

impl DateLocale {
    /// Formats a date for display in this locale.
    pub fn format_date(self, date: NaiveDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            Self::EnUs => format!("{m}/{d}/{y}"),
            Self::EnGb | Self::Fr => date.format("%d/%m/%Y").to_string(),
            Self::EnCa | Self::Iso => machine_date(date),
            Self::De => format!("{d}.{m}.{y}"),
            Self::Ja => format!("{y}/{m}/{d}"),
        }
    }

    /// The canonical tag for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnCa => "en-CA",
            Self::Iso => "iso",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Ja => "ja",
        }
    }

    /// Parses a BCP 47 tag (`en-US`) or POSIX locale (`en_US.UTF-8`).
    ///
    /// Matching is case-insensitive. Encoding and modifier suffixes are ignored,
    /// and an unknown region falls back to its language.
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        let normalized = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();

        let locale = match normalized.as_str() {
            "c" | "posix" | "en-us" => Self::EnUs,
            "en-gb" | "en-au" | "en-nz" | "en-ie" => Self::EnGb,
            "en-ca" | "fr-ca" => Self::EnCa,
            "iso" => Self::Iso,
            other => match other.split('-').next().unwrap_or_default() {
                "en" => Self::EnUs,
                "de" => Self::De,
                "fr" => Self::Fr,
                "ja" => Self::Ja,
                _ => return Err(ConfigError::UnknownLocale(tag.to_string())),
            },
        };

        Ok(locale)
    }

    /// Resolves the display locale from `LC_ALL`, `LC_TIME` and `LANG`.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolves the display locale using `lookup` in place of the process environment.
    ///
    /// The first non-empty variable wins. An unsupported value falls back to the
    /// default rather than consulting lower-priority variables.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        for key in LOCALE_ENV_VARS {
            let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
                continue;
            };

            return match Self::parse(&value) {
                Ok(locale) => {
                    log::debug!("[locale] {key}={value} -> {}", locale.tag());
                    locale
                }
                Err(e) => {
                    log::debug!("[locale] {e}, using {}", Self::default().tag());
                    Self::default()
                }
            };
        }

        Self::default()
    }
}

impl FromStr for DateLocale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
