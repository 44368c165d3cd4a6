//! Reservation Aggregations
//!
//! Group-by-then-reduce queries over the prepared [`FeatureTable`]: the
//! cutoff split with its per-segment averages, daily and weekday series for
//! the trend and comparison charts, and the stay-length distribution.
//!
//! Every function here is deterministic and takes the table by reference.

pub mod grouping;
pub mod primitives;
pub mod segments;

pub use grouping::{
    daily_aggregates, stay_length_histogram, weekday_aggregates, DailyAggregate, StayLengthBin,
    WeekdayAggregate,
};
pub use segments::{split_at_cutoff, summarize_segment, CutoffSplit, Segment, SegmentSummary};

use crate::pipeline::FeatureTable;
use chrono::NaiveDate;
use serde::Serialize;

/// Every aggregate the dashboard shows, computed in one pass over the table.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationAggregates {
    pub cutoff: NaiveDate,
    pub current: SegmentSummary,
    pub future: SegmentSummary,
    pub daily: Vec<DailyAggregate>,
    pub weekdays: Vec<WeekdayAggregate>,
    pub stay_lengths: Vec<StayLengthBin>,
    pub undefined_rates: usize,
    pub total_reservations: usize,
}

impl ReservationAggregates {
    /// Computes all aggregates of `table`, splitting segments at `cutoff`.
    pub fn compute(table: &FeatureTable, cutoff: NaiveDate) -> Self {
        let split = split_at_cutoff(table, cutoff);
        let [current, future] = split.summaries();

        ReservationAggregates {
            cutoff,
            current,
            future,
            daily: daily_aggregates(table),
            weekdays: weekday_aggregates(table),
            stay_lengths: stay_length_histogram(table),
            undefined_rates: table.undefined_rate_count(),
            total_reservations: table.len(),
        }
    }
}
