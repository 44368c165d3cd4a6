//! Reservation preparation pipeline
//!
//! Turns raw source rows into the typed feature table the dashboard reads:
//! drop the building column, sort by check-in, derive the stay length, then
//! derive pricing and calendar features. Every stage takes its input by value
//! and returns a new table; nothing is mutated in place.

pub mod adjust;
pub mod features;

pub use adjust::{adjust_columns, AdjustedReservation};
pub use features::{build_features, FeatureTable, ReservationFeatures};

use crate::calendar::PeakDays;
use crate::reservation::Reservation;
use crate::source::{ReservationSource, SourceError};
use chrono::NaiveDate;
use tracing::info;

/// Errors raised while preparing the reservation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Check-out precedes check-in
    NegativeStay {
        id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    /// Reading the source failed
    Source(SourceError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::NegativeStay {
                id,
                check_in,
                check_out,
            } => write!(
                f,
                "Reservation {} checks out ({}) before it checks in ({})",
                id, check_out, check_in
            ),
            PipelineError::Source(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<SourceError> for PipelineError {
    fn from(err: SourceError) -> Self {
        PipelineError::Source(err)
    }
}

/// Runs the column adjustment and feature stages over raw rows.
pub fn prepare(
    reservations: Vec<Reservation>,
    peak_days: &PeakDays,
) -> Result<FeatureTable, PipelineError> {
    let adjusted = adjust_columns(reservations)?;
    Ok(build_features(adjusted, peak_days))
}

/// Loads every row from `source` and prepares the feature table.
pub fn load_and_prepare(
    source: &dyn ReservationSource,
    peak_days: &PeakDays,
) -> Result<FeatureTable, PipelineError> {
    let reservations = source.load_reservations()?;
    let table = prepare(reservations, peak_days)?;

    info!(
        source = %source.describe(),
        rows = table.len(),
        undefined_rates = table.undefined_rate_count(),
        "reservation table prepared"
    );

    Ok(table)
}
