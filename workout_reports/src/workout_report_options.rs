use stack_string::format_sstr;
use std::{fmt, str::FromStr};

use workout_lib::{errors::WorkoutError as Error, workout_config::WorkoutConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLocale {
    #[default]
    En,
    Ru,
}

impl FromStr for ReportLocale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            _ => Err(Error::CustomError(format_sstr!("Invalid report locale {s}"))),
        }
    }
}

impl fmt::Display for ReportLocale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Ru => f.write_str("ru"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Txt,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            _ => Err(Error::CustomError(format_sstr!("Invalid report format {s}"))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Txt => f.write_str("txt"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkoutReportOptions {
    pub locale: ReportLocale,
    pub format: ReportFormat,
}

impl WorkoutReportOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// Return error if the configured locale or format is unknown
    pub fn from_config(config: &WorkoutConfig) -> Result<Self, Error> {
        Ok(Self {
            locale: config.report_locale.parse()?,
            format: config.report_format.parse()?,
        })
    }
}
