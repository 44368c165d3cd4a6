use super::format::{format_currency, format_decimal};
use super::texts::Texts;
use crate::analytics::SegmentSummary;
use crate::calendar::Locale;
use serde::Serialize;

/// A headline number shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub id: &'static str,
    /// Formatted value, e.g. "R$ 1.234,57"
    pub title: String,
    /// What the value is, e.g. "ADR Atual"
    pub label: String,
    /// Raw value, `None` when the segment has no data
    pub value: Option<f64>,
}

fn rate_card(id: &'static str, label: &str, value: Option<f64>, locale: Locale) -> MetricCard {
    let texts = Texts::for_locale(locale);
    MetricCard {
        id,
        title: value.map_or_else(|| texts.no_data.to_string(), |v| format_currency(v, locale)),
        label: label.to_string(),
        value,
    }
}

fn stay_card(id: &'static str, label: &str, value: Option<f64>, locale: Locale) -> MetricCard {
    let texts = Texts::for_locale(locale);
    MetricCard {
        id,
        title: value.map_or_else(
            || texts.no_data.to_string(),
            |v| format!("{} {}", format_decimal(v, 2, locale), texts.stay_unit),
        ),
        label: label.to_string(),
        value,
    }
}

/// ADR and average stay cards for the current and future segments.
pub fn metric_cards(
    current: &SegmentSummary,
    future: &SegmentSummary,
    locale: Locale,
) -> Vec<MetricCard> {
    let texts = Texts::for_locale(locale);

    vec![
        rate_card("adr-current", texts.adr_current, current.average_daily_rate, locale),
        rate_card("adr-future", texts.adr_future, future.average_daily_rate, locale),
        stay_card("stay-current", texts.stay_current, current.average_stay_length, locale),
        stay_card("stay-future", texts.stay_future, future.average_stay_length, locale),
    ]
}
