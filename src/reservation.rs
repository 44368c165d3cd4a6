use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reservation row as it comes out of the source sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Reservation identifier
    pub id: String,
    /// Arrival date
    pub check_in: NaiveDate,
    /// Departure date
    pub check_out: NaiveDate,
    /// Total amount charged for the stay
    pub revenue: f64,
    /// Building the unit belongs to; dropped by the pipeline
    pub building: Option<String>,
}

impl Reservation {
    /// Creates a reservation without building information.
    pub fn new(id: impl Into<String>, check_in: NaiveDate, check_out: NaiveDate, revenue: f64) -> Self {
        Reservation {
            id: id.into(),
            check_in,
            check_out,
            revenue,
            building: None,
        }
    }

    /// Sets the building identifier.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    /// Whole days between check-in and check-out. Negative for malformed rows.
    pub fn stay_days(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}
