//! Dashboard settings read from the environment

use crate::calendar::{CalendarError, Locale, PeakDays};
use crate::source::{CsvReservationSource, ReservationSource, SourceError};
use crate::sqlite_source::SqliteReservationSource;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Default boundary between the "current" and "future" segments.
pub const DEFAULT_CUTOFF: (i32, u32, u32) = (2022, 11, 14);

/// Where reservation rows are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceConfig {
    /// CSV export of the reservation sheet
    Csv(PathBuf),
    /// SQLite database holding a `reservations` table
    Sqlite(PathBuf),
}

impl DataSourceConfig {
    /// Picks the source kind from the file extension (`.db`, `.sqlite`,
    /// `.sqlite3` are databases, anything else is read as CSV).
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_database = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_lowercase().as_str(), "db" | "sqlite" | "sqlite3"))
            .unwrap_or(false);

        if is_database {
            DataSourceConfig::Sqlite(path)
        } else {
            DataSourceConfig::Csv(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            DataSourceConfig::Csv(path) | DataSourceConfig::Sqlite(path) => path,
        }
    }

    /// Opens the configured source.
    pub fn open(&self) -> Result<Box<dyn ReservationSource + Send>, SourceError> {
        match self {
            DataSourceConfig::Csv(path) => Ok(Box::new(CsvReservationSource::new(path.clone()))),
            DataSourceConfig::Sqlite(path) => Ok(Box::new(SqliteReservationSource::open(path)?)),
        }
    }
}

/// What the dashboard computes and how it labels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub source: DataSourceConfig,
    /// Last check-in date of the "current" segment
    pub cutoff: NaiveDate,
    pub peak_days: PeakDays,
    pub locale: Locale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_CUTOFF;
        DashboardConfig {
            source: DataSourceConfig::from_path("reservations.csv"),
            cutoff: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            peak_days: PeakDays::default(),
            locale: Locale::default(),
        }
    }
}

impl DashboardConfig {
    /// Reads `RESERVATIONS_PATH`, `CUTOFF_DATE`, `PEAK_DAYS` and
    /// `DASHBOARD_LOCALE`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DashboardConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DashboardConfig::default();

        if let Some(path) = lookup("RESERVATIONS_PATH") {
            config.source = DataSourceConfig::from_path(path);
        }

        if let Some(cutoff) = lookup("CUTOFF_DATE") {
            config.cutoff = NaiveDate::parse_from_str(cutoff.trim(), "%Y-%m-%d")
                .map_err(|e| ConfigError::InvalidValue {
                    variable: "CUTOFF_DATE",
                    message: e.to_string(),
                })?;
        }

        if let Some(days) = lookup("PEAK_DAYS") {
            config.peak_days = days.parse().map_err(|e: CalendarError| ConfigError::InvalidValue {
                variable: "PEAK_DAYS",
                message: e.to_string(),
            })?;
        }

        if let Some(locale) = lookup("DASHBOARD_LOCALE") {
            config.locale = locale.parse().map_err(|e: CalendarError| ConfigError::InvalidValue {
                variable: "DASHBOARD_LOCALE",
                message: e.to_string(),
            })?;
        }

        Ok(config)
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        variable: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { variable, message } => {
                write!(f, "Invalid value for {}: {}", variable, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
