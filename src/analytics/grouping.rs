use crate::analytics::primitives::{max, mean};
use crate::calendar::Weekday;
use crate::pipeline::{FeatureTable, ReservationFeatures};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregates of all reservations checking in on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub revenue: f64,
    pub reservations: usize,
    /// Share of the day's reservations that fall on a peak weekday (0.0-1.0)
    pub peak_share: f64,
    /// Mean of the defined daily rates
    pub average_daily_rate: Option<f64>,
    /// Highest defined daily rate
    pub top_daily_rate: Option<f64>,
}

/// Aggregates of all reservations checking in on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayAggregate {
    pub weekday: Weekday,
    pub reservations: usize,
    pub revenue: f64,
}

/// Number of reservations with a given stay length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayLengthBin {
    pub stay_length: u32,
    pub reservations: usize,
}

fn group_by<K, F>(table: &FeatureTable, key: F) -> BTreeMap<K, Vec<&ReservationFeatures>>
where
    K: Ord,
    F: Fn(&ReservationFeatures) -> K,
{
    let mut groups: BTreeMap<K, Vec<&ReservationFeatures>> = BTreeMap::new();
    for row in table {
        groups.entry(key(row)).or_default().push(row);
    }
    groups
}

/// Per check-in day aggregates, ascending by date. Days without check-ins are absent.
pub fn daily_aggregates(table: &FeatureTable) -> Vec<DailyAggregate> {
    group_by(table, |row| row.check_in)
        .into_iter()
        .map(|(date, rows)| {
            let rates = || rows.iter().filter_map(|row| row.price_per_day);

            DailyAggregate {
                date,
                revenue: rows.iter().map(|row| row.revenue).sum(),
                reservations: rows.len(),
                peak_share: mean(rows.iter().map(|row| row.peak_indicator())).unwrap_or(0.0),
                average_daily_rate: mean(rates()),
                top_daily_rate: max(rates()),
            }
        })
        .collect()
}

/// Reservation count and revenue for each of the seven weekdays, Monday first.
///
/// Weekdays without check-ins are reported with zero counts so the counts
/// always add up to the table length.
pub fn weekday_aggregates(table: &FeatureTable) -> Vec<WeekdayAggregate> {
    let groups = group_by(table, |row| row.weekday);

    Weekday::ALL
        .iter()
        .map(|&weekday| {
            let rows = groups.get(&weekday).map(Vec::as_slice).unwrap_or_default();
            WeekdayAggregate {
                weekday,
                reservations: rows.len(),
                revenue: rows.iter().map(|row| row.revenue).sum(),
            }
        })
        .collect()
}

/// Reservation counts per distinct stay length, ascending.
pub fn stay_length_histogram(table: &FeatureTable) -> Vec<StayLengthBin> {
    group_by(table, |row| row.stay_length)
        .into_iter()
        .map(|(stay_length, rows)| StayLengthBin {
            stay_length,
            reservations: rows.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::PeakDays;
    use crate::pipeline::prepare;
    use crate::reservation::Reservation;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 11, d).unwrap()
    }

    fn sample_table() -> FeatureTable {
        prepare(
            vec![
                // Fri 2022-11-18
                Reservation::new("1", date(18), date(20), 400.0),
                Reservation::new("2", date(18), date(19), 250.0),
                // Mon 2022-11-14
                Reservation::new("3", date(14), date(17), 300.0),
                Reservation::new("4", date(14), date(14), 90.0),
                // Sat 2022-11-19
                Reservation::new("5", date(19), date(21), 500.0),
            ],
            &PeakDays::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_daily_aggregates() {
        let daily = daily_aggregates(&sample_table());

        assert_eq!(daily.len(), 3);
        assert_eq!(daily[0].date, date(14));
        assert_eq!(daily[0].reservations, 2);
        assert_eq!(daily[0].revenue, 390.0);
        assert_eq!(daily[0].peak_share, 0.0);
        // Zero-length stay is skipped, leaving only 300 / 3
        assert_eq!(daily[0].average_daily_rate, Some(100.0));
        assert_eq!(daily[0].top_daily_rate, Some(100.0));

        assert_eq!(daily[1].date, date(18));
        assert_eq!(daily[1].revenue, 650.0);
        assert_eq!(daily[1].peak_share, 1.0);
        assert_eq!(daily[1].average_daily_rate, Some(225.0));
        assert_eq!(daily[1].top_daily_rate, Some(250.0));
    }

    #[test]
    fn test_day_with_only_zero_length_stays_has_no_rate() {
        let table = prepare(
            vec![Reservation::new("z", date(10), date(10), 50.0)],
            &PeakDays::default(),
        )
        .unwrap();

        let daily = daily_aggregates(&table);
        assert_eq!(daily[0].reservations, 1);
        assert_eq!(daily[0].average_daily_rate, None);
        assert_eq!(daily[0].top_daily_rate, None);
    }

    #[test]
    fn test_weekday_aggregates_cover_all_days() {
        let table = sample_table();
        let weekdays = weekday_aggregates(&table);

        assert_eq!(weekdays.len(), 7);
        assert_eq!(weekdays.iter().map(|w| w.reservations).sum::<usize>(), table.len());
        assert_eq!(weekdays[Weekday::Mon.index()].reservations, 2);
        assert_eq!(weekdays[Weekday::Fri.index()].revenue, 650.0);
        assert_eq!(weekdays[Weekday::Sat.index()].reservations, 1);
        assert_eq!(weekdays[Weekday::Wed.index()].reservations, 0);
        assert_eq!(weekdays[Weekday::Wed.index()].revenue, 0.0);
    }

    #[test]
    fn test_stay_length_histogram() {
        let histogram = stay_length_histogram(&sample_table());

        assert_eq!(
            histogram,
            vec![
                StayLengthBin { stay_length: 0, reservations: 1 },
                StayLengthBin { stay_length: 1, reservations: 1 },
                StayLengthBin { stay_length: 2, reservations: 2 },
                StayLengthBin { stay_length: 3, reservations: 1 },
            ]
        );
    }

    #[test]
    fn test_empty_table_aggregates() {
        let table = FeatureTable::default();
        assert!(daily_aggregates(&table).is_empty());
        assert!(stay_length_histogram(&table).is_empty());
        assert!(weekday_aggregates(&table).iter().all(|w| w.reservations == 0));
    }
}
