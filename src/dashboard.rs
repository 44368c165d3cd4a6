//! Dashboard Presentation
//!
//! Turns the aggregates of a [`FeatureTable`] into what the rendering surface
//! draws: metric cards with formatted values and chart specifications with
//! already-aggregated series. Nothing here computes statistics; it only
//! shapes and labels them.

pub mod cards;
pub mod charts;
pub mod format;
pub mod texts;

pub use cards::MetricCard;
pub use charts::{AxisValues, ChartKind, ChartSpec, ColorSeries, CHART_IDS};
pub use texts::Texts;

use crate::analytics::ReservationAggregates;
use crate::calendar::{DateRange, Locale, Weekday};
use crate::config::DashboardConfig;
use crate::pipeline::FeatureTable;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Everything the dashboard page shows for one selection of reservations.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub locale: Locale,
    pub cutoff: NaiveDate,
    /// Check-in range covered by the selection, `None` when it is empty
    pub range: Option<DateRange>,
    pub peak_days: Vec<Weekday>,
    pub reservations: usize,
    pub total_revenue: f64,
    pub cards: Vec<MetricCard>,
    pub charts: Vec<ChartSpec>,
    /// Data-quality notes (undefined rates, empty segments)
    pub warnings: Vec<String>,
}

impl DashboardView {
    /// Builds the full dashboard for `table`.
    pub fn build(table: &FeatureTable, config: &DashboardConfig) -> Self {
        let aggregates = ReservationAggregates::compute(table, config.cutoff);
        Self::from_aggregates(table, &aggregates, config)
    }

    /// Builds the dashboard from precomputed aggregates of `table`.
    pub fn from_aggregates(
        table: &FeatureTable,
        aggregates: &ReservationAggregates,
        config: &DashboardConfig,
    ) -> Self {
        let locale = config.locale;
        let texts = Texts::for_locale(locale);

        let charts = vec![
            charts::stay_length_chart(&aggregates.stay_lengths, texts),
            charts::daily_revenue_chart(&aggregates.daily, texts),
            charts::daily_reservations_chart(&aggregates.daily, &config.peak_days, locale),
            charts::daily_peak_rate_chart(&aggregates.daily, &config.peak_days, locale),
            charts::daily_average_rate_chart(&aggregates.daily, texts),
            charts::weekday_reservations_chart(&aggregates.weekdays, locale),
            charts::weekday_revenue_chart(&aggregates.weekdays, locale),
        ];

        let view = DashboardView {
            title: texts.dashboard_title.to_string(),
            locale,
            cutoff: aggregates.cutoff,
            range: table.check_in_range(),
            peak_days: config.peak_days.iter().collect(),
            reservations: aggregates.total_reservations,
            total_revenue: table.total_revenue(),
            cards: cards::metric_cards(&aggregates.current, &aggregates.future, locale),
            charts,
            warnings: warnings(aggregates, texts),
        };

        debug!(
            reservations = view.reservations,
            warnings = view.warnings.len(),
            "dashboard view built"
        );

        view
    }

    /// Looks up a chart by id.
    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|chart| chart.id == id)
    }

    /// Consumes the view, keeping only the chart with `id`.
    pub fn into_chart(self, id: &str) -> Option<ChartSpec> {
        self.charts.into_iter().find(|chart| chart.id == id)
    }
}

fn warnings(aggregates: &ReservationAggregates, texts: &Texts) -> Vec<String> {
    let mut notes = Vec::new();

    if aggregates.undefined_rates > 0 {
        notes.push(texts.undefined_rates_warning(aggregates.undefined_rates));
    }
    if aggregates.current.reservations == 0 {
        notes.push(texts.empty_period_warning(texts.current_period));
    }
    if aggregates.future.reservations == 0 {
        notes.push(texts.empty_period_warning(texts.future_period));
    }

    notes
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

    fn table() -> FeatureTable {
        prepare(
            vec![
                Reservation::new("1", date(10), date(12), 200.0),
                Reservation::new("2", date(20), date(21), 150.0),
            ],
            &PeakDays::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_view_has_four_cards_and_every_chart() {
        let view = DashboardView::build(&table(), &DashboardConfig::default());

        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.charts.len(), CHART_IDS.len());
        for (chart, id) in view.charts.iter().zip(CHART_IDS) {
            assert_eq!(chart.id, id);
            assert_eq!(chart.x.len(), chart.y.len());
        }
        assert_eq!(view.cards[0].value, Some(100.0));
        assert_eq!(view.cards[1].value, Some(150.0));
        assert_eq!(view.reservations, 2);
        assert_eq!(view.total_revenue, 350.0);
        assert_eq!(view.range, Some(DateRange::new(date(10), date(20))));
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn test_empty_future_adds_warning() {
        let config = DashboardConfig {
            cutoff: date(30),
            locale: Locale::En,
            ..DashboardConfig::default()
        };

        let view = DashboardView::build(&table(), &config);

        assert_eq!(view.cards[1].title, "no data");
        assert_eq!(view.warnings, vec!["No reservations in the future period".to_string()]);
    }

    #[test]
    fn test_zero_length_stay_warning() {
        let table = prepare(
            vec![
                Reservation::new("1", date(10), date(12), 200.0),
                Reservation::new("z", date(20), date(20), 90.0),
            ],
            &PeakDays::default(),
        )
        .unwrap();

        let view = DashboardView::build(&table, &DashboardConfig::default());

        assert_eq!(view.warnings.len(), 1);
        assert!(view.warnings[0].starts_with("1 reserva(s)"));
        // The only future row has no rate, so the future ADR is undefined
        assert_eq!(view.cards[1].value, None);
        let peak_rate = view.chart(charts::DAILY_PEAK_RATE).unwrap();
        assert_eq!(peak_rate.y, vec![Some(100.0), None]);
        let average_rate = view.chart(charts::DAILY_AVERAGE_RATE).unwrap();
        assert_eq!(average_rate.y, vec![Some(100.0), None]);
    }

    #[test]
    fn test_empty_table_view() {
        let view = DashboardView::build(&FeatureTable::default(), &DashboardConfig::default());

        assert_eq!(view.reservations, 0);
        assert_eq!(view.range, None);
        assert_eq!(view.warnings.len(), 2);
        // Weekday charts always list the seven days; the rest have no points
        for chart in &view.charts {
            let expected = match chart.id {
                charts::WEEKDAY_RESERVATIONS | charts::WEEKDAY_REVENUE => 7,
                _ => 0,
            };
            assert_eq!(chart.y.len(), expected, "chart {}", chart.id);
        }
    }

    #[test]
    fn test_into_chart() {
        let view = DashboardView::build(&table(), &DashboardConfig::default());
        assert!(view.clone().into_chart("nope").is_none());
        assert_eq!(view.into_chart(charts::WEEKDAY_REVENUE).unwrap().y.len(), 7);
    }
}
