use crate::analytics::primitives::mean_of_group_means;
use crate::pipeline::FeatureTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Side of the cutoff a reservation falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Check-in on or before the cutoff
    Current,
    /// Check-in after the cutoff
    Future,
}

impl Segment {
    /// Segment a check-in date belongs to.
    pub fn classify(check_in: NaiveDate, cutoff: NaiveDate) -> Self {
        if check_in <= cutoff {
            Segment::Current
        } else {
            Segment::Future
        }
    }
}

/// A feature table partitioned at a cutoff date.
#[derive(Debug, Clone)]
pub struct CutoffSplit {
    pub cutoff: NaiveDate,
    pub current: FeatureTable,
    pub future: FeatureTable,
}

impl CutoffSplit {
    pub fn segment(&self, segment: Segment) -> &FeatureTable {
        match segment {
            Segment::Current => &self.current,
            Segment::Future => &self.future,
        }
    }

    pub fn summaries(&self) -> [SegmentSummary; 2] {
        [
            summarize_segment(Segment::Current, &self.current),
            summarize_segment(Segment::Future, &self.future),
        ]
    }
}

/// Splits `table` into rows checking in on/before `cutoff` and rows after it.
///
/// Every row lands in exactly one side and row order is preserved.
pub fn split_at_cutoff(table: &FeatureTable, cutoff: NaiveDate) -> CutoffSplit {
    CutoffSplit {
        cutoff,
        current: table.filter(|row| Segment::classify(row.check_in, cutoff) == Segment::Current),
        future: table.filter(|row| Segment::classify(row.check_in, cutoff) == Segment::Future),
    }
}

/// Headline statistics of one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub segment: Segment,
    pub reservations: usize,
    /// Mean over check-in days of the daily mean price per day
    pub average_daily_rate: Option<f64>,
    /// Mean over check-in days of the daily mean stay length
    pub average_stay_length: Option<f64>,
}

/// Computes the average daily rate and average stay of a segment.
///
/// Both statistics first average per check-in day and then across days, so
/// busy days weigh as much as quiet ones. An empty segment has neither.
pub fn summarize_segment(segment: Segment, table: &FeatureTable) -> SegmentSummary {
    SegmentSummary {
        segment,
        reservations: table.len(),
        average_daily_rate: mean_of_group_means(
            table.iter().map(|row| (row.check_in, row.price_per_day)),
        ),
        average_stay_length: mean_of_group_means(
            table
                .iter()
                .map(|row| (row.check_in, Some(f64::from(row.stay_length)))),
        ),
    }
}
