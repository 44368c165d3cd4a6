use super::adjust::AdjustedReservation;
use crate::calendar::{CalendarFields, DateRange, PeakDays, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A fully prepared reservation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationFeatures {
    pub id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub revenue: f64,
    pub stay_length: u32,
    /// Revenue divided by stay length; `None` for zero-length stays
    pub price_per_day: Option<f64>,
    /// Weekday of the check-in date
    pub weekday: Weekday,
    /// True when the check-in weekday is a configured peak day
    pub is_peak: bool,
    #[serde(flatten)]
    pub calendar: CalendarFields,
}

impl ReservationFeatures {
    /// Derives the pricing and calendar features of one adjusted row.
    pub fn derive(row: AdjustedReservation, peak_days: &PeakDays) -> Self {
        let weekday = Weekday::of(row.check_in);

        ReservationFeatures {
            price_per_day: price_per_day(row.revenue, row.stay_length),
            weekday,
            is_peak: peak_days.contains(weekday),
            calendar: CalendarFields::from_date(row.check_in),
            id: row.id,
            check_in: row.check_in,
            check_out: row.check_out,
            revenue: row.revenue,
            stay_length: row.stay_length,
        }
    }

    /// Peak flag as a 0/1 value for averaging.
    pub fn peak_indicator(&self) -> f64 {
        if self.is_peak {
            1.0
        } else {
            0.0
        }
    }
}

/// Average daily rate of one stay. Undefined when the stay has no nights.
pub fn price_per_day(revenue: f64, stay_length: u32) -> Option<f64> {
    if stay_length == 0 {
        None
    } else {
        Some(revenue / f64::from(stay_length))
    }
}

/// Reservation rows ordered by check-in date.
///
/// The table is immutable once built; filters return new tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureTable {
    rows: Vec<ReservationFeatures>,
}

impl FeatureTable {
    /// Builds a table, sorting rows by check-in (stable).
    pub fn new(mut rows: Vec<ReservationFeatures>) -> Self {
        rows.sort_by_key(|row| row.check_in);
        FeatureTable { rows }
    }

    pub fn records(&self) -> &[ReservationFeatures] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReservationFeatures> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest check-in dates, `None` for an empty table.
    pub fn check_in_range(&self) -> Option<DateRange> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some(DateRange::new(first.check_in, last.check_in)),
            _ => None,
        }
    }

    /// Rows whose check-in falls inside `range`.
    pub fn filter_range(&self, range: &DateRange) -> FeatureTable {
        self.filter(|row| range.contains(row.check_in))
    }

    /// Rows matching `predicate`, order preserved.
    pub fn filter<F>(&self, mut predicate: F) -> FeatureTable
    where
        F: FnMut(&ReservationFeatures) -> bool,
    {
        FeatureTable {
            rows: self.rows.iter().filter(|row| predicate(row)).cloned().collect(),
        }
    }

    /// Number of zero-length stays, whose daily rate is undefined.
    pub fn undefined_rate_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.price_per_day.is_none())
            .count()
    }

    /// Total revenue across all rows.
    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|row| row.revenue).sum()
    }
}

impl<'a> IntoIterator for &'a FeatureTable {
    type Item = &'a ReservationFeatures;
    type IntoIter = std::slice::Iter<'a, ReservationFeatures>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Derives price-per-day and calendar features for every adjusted row.
pub fn build_features(adjusted: Vec<AdjustedReservation>, peak_days: &PeakDays) -> FeatureTable {
    let rows = adjusted
        .into_iter()
        .map(|row| ReservationFeatures::derive(row, peak_days))
        .collect();

    let table = FeatureTable::new(rows);

    let undefined = table.undefined_rate_count();
    if undefined > 0 {
        warn!(
            count = undefined,
            "zero-length stays have no daily rate and are left out of rate aggregates"
        );
    }

    table
}
