use super::PipelineError;
use crate::reservation::Reservation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation row after column adjustment: building dropped, stay length derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedReservation {
    pub id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub revenue: f64,
    /// Whole days between check-in and check-out
    pub stay_length: u32,
}

impl TryFrom<Reservation> for AdjustedReservation {
    type Error = PipelineError;

    fn try_from(reservation: Reservation) -> Result<Self, Self::Error> {
        let stay_length =
            u32::try_from(reservation.stay_days()).map_err(|_| PipelineError::NegativeStay {
                id: reservation.id.clone(),
                check_in: reservation.check_in,
                check_out: reservation.check_out,
            })?;

        Ok(AdjustedReservation {
            id: reservation.id,
            check_in: reservation.check_in,
            check_out: reservation.check_out,
            revenue: reservation.revenue,
            stay_length,
        })
    }
}

/// Drops the building column, sorts by check-in and derives the stay length.
///
/// The sort is stable, so rows sharing a check-in date keep their source
/// order.
///
/// # Errors
/// Returns [`PipelineError::NegativeStay`] for the first row whose check-out
/// precedes its check-in.
pub fn adjust_columns(
    mut reservations: Vec<Reservation>,
) -> Result<Vec<AdjustedReservation>, PipelineError> {
    reservations.sort_by_key(|reservation| reservation.check_in);

    reservations
        .into_iter()
        .map(AdjustedReservation::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, m, d).unwrap()
    }

    #[test]
    fn test_stay_length_is_whole_day_difference() {
        let adjusted = adjust_columns(vec![
            Reservation::new("1", date(11, 10), date(11, 12), 200.0),
            Reservation::new("2", date(11, 28), date(12, 5), 700.0),
        ])
        .unwrap();

        assert_eq!(adjusted[0].stay_length, 2);
        assert_eq!(adjusted[1].stay_length, 7);
    }

    #[test]
    fn test_sorted_by_check_in_with_stable_ties() {
        let adjusted = adjust_columns(vec![
            Reservation::new("late", date(11, 20), date(11, 21), 1.0),
            Reservation::new("tie-first", date(11, 10), date(11, 11), 1.0),
            Reservation::new("early", date(11, 1), date(11, 2), 1.0),
            Reservation::new("tie-second", date(11, 10), date(11, 13), 1.0),
        ])
        .unwrap();

        let ids: Vec<&str> = adjusted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "tie-first", "tie-second", "late"]);
    }

    #[test]
    fn test_building_is_dropped_and_fields_preserved() {
        let adjusted = adjust_columns(vec![
            Reservation::new("9", date(11, 10), date(11, 12), 321.5).with_building("Torre A"),
        ])
        .unwrap();

        assert_eq!(
            adjusted[0],
            AdjustedReservation {
                id: "9".to_string(),
                check_in: date(11, 10),
                check_out: date(11, 12),
                revenue: 321.5,
                stay_length: 2,
            }
        );
    }

    #[test]
    fn test_same_day_checkout_gives_zero_length() {
        let adjusted =
            adjust_columns(vec![Reservation::new("0", date(11, 10), date(11, 10), 90.0)]).unwrap();
        assert_eq!(adjusted[0].stay_length, 0);
    }

    #[test]
    fn test_negative_stay_is_rejected() {
        let result = adjust_columns(vec![
            Reservation::new("ok", date(11, 1), date(11, 2), 1.0),
            Reservation::new("swapped", date(11, 12), date(11, 10), 1.0),
        ]);

        assert_eq!(
            result,
            Err(PipelineError::NegativeStay {
                id: "swapped".to_string(),
                check_in: date(11, 12),
                check_out: date(11, 10),
            })
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(adjust_columns(Vec::new()).unwrap().is_empty());
    }
}
