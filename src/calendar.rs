use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Date formats accepted for check-in and check-out cells, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a calendar date as exported by spreadsheet tools.
///
/// Accepts plain ISO dates, day-first dates (`dd/mm/yyyy`) and timestamps
/// whose time part is discarded.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Inclusive range of check-in dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (inclusive)
    pub start: NaiveDate,
    /// End date (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new DateRange.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Returns true when `date` falls inside the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// A range is valid when its start does not come after its end.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

/// Day of the week of a check-in date, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All seven days in week order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Weekday of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        Self::ALL[date.weekday().num_days_from_monday() as usize]
    }

    /// Zero-based position in the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter display label in the given locale.
    pub fn label(self, locale: Locale) -> &'static str {
        locale.weekday_labels()[self.index()]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(Locale::En))
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    /// Accepts English or Portuguese three-letter labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Locale::ALL
            .iter()
            .find_map(|locale| {
                locale
                    .weekday_labels()
                    .iter()
                    .position(|label| label.to_lowercase() == needle)
            })
            .map(|index| Self::ALL[index])
            .ok_or_else(|| CalendarError::UnknownWeekday(s.to_string()))
    }
}

/// Language used for weekday labels and dashboard texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese, the language of the source sheet
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::En];

    /// Weekday labels, Monday first.
    pub fn weekday_labels(self) -> [&'static str; 7] {
        match self {
            Locale::PtBr => ["Seg", "Ter", "Qua", "Qui", "Sex", "Sab", "Dom"],
            Locale::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(CalendarError::UnknownLocale(other.to_string())),
        }
    }
}

/// Set of weekdays whose check-ins count as "peak" demand.
///
/// Defaults to Friday and Saturday, the days with the highest sales in the
/// source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakDays(BTreeSet<Weekday>);

impl PeakDays {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        PeakDays(days.into_iter().collect())
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().copied()
    }

    /// Labels joined for display, e.g. "Sex, Sab".
    pub fn describe(&self, locale: Locale) -> String {
        self.iter()
            .map(|day| day.label(locale))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PeakDays {
    fn default() -> Self {
        PeakDays::new([Weekday::Fri, Weekday::Sat])
    }
}

impl FromStr for PeakDays {
    type Err = CalendarError;

    /// Parses a comma separated label list such as `fri,sat` or `Sex,Sab`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Weekday::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        if days.is_empty() {
            return Err(CalendarError::EmptyPeakDays);
        }

        Ok(PeakDays(days))
    }
}

/// Calendar attributes derived from a check-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFields {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    /// 1-4
    pub quarter: u32,
    /// 1-366
    pub day_of_year: u32,
    /// ISO 8601 week number
    pub week_of_year: u32,
}

impl CalendarFields {
    pub fn from_date(date: NaiveDate) -> Self {
        CalendarFields {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
            day_of_year: date.ordinal(),
            week_of_year: date.iso_week().week(),
        }
    }
}

/// Errors raised while parsing calendar settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    UnknownWeekday(String),
    UnknownLocale(String),
    EmptyPeakDays,
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::UnknownWeekday(label) => write!(f, "Unknown weekday label: {}", label),
            CalendarError::UnknownLocale(code) => write!(f, "Unknown locale: {}", code),
            CalendarError::EmptyPeakDays => write!(f, "At least one peak day is required"),
        }
    }
}

impl std::error::Error for CalendarError {}
