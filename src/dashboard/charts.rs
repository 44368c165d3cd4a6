use super::format::format_day_month;
use super::texts::Texts;
use crate::analytics::{DailyAggregate, StayLengthBin, WeekdayAggregate};
use crate::calendar::{Locale, PeakDays};
use serde::Serialize;

pub const STAY_LENGTH: &str = "stay-length";
pub const DAILY_REVENUE: &str = "daily-revenue";
pub const DAILY_RESERVATIONS: &str = "daily-reservations";
pub const DAILY_PEAK_RATE: &str = "daily-peak-rate";
pub const DAILY_AVERAGE_RATE: &str = "daily-average-rate";
pub const WEEKDAY_RESERVATIONS: &str = "weekday-reservations";
pub const WEEKDAY_REVENUE: &str = "weekday-revenue";

/// Chart identifiers in display order.
pub const CHART_IDS: [&str; 7] = [
    STAY_LENGTH,
    DAILY_REVENUE,
    DAILY_RESERVATIONS,
    DAILY_PEAK_RATE,
    DAILY_AVERAGE_RATE,
    WEEKDAY_RESERVATIONS,
    WEEKDAY_REVENUE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Histogram,
    Line,
    Bar,
}

/// Values along the x axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValues {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl AxisValues {
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Numbers(values) => values.len(),
            AxisValues::Labels(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Color channel of a chart; categorical colors reuse the x labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorSeries {
    /// Continuous value per point (e.g. peak share)
    Scale { label: String, values: Vec<f64> },
    /// One color per x category
    Category,
}

/// An already-aggregated chart, ready to be drawn.
///
/// `x` and `y` always have the same length. A `null` in `y` marks an
/// undefined value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: &'static str,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: AxisValues,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSeries>,
}

/// Pre-binned distribution of stay lengths.
pub fn stay_length_chart(bins: &[StayLengthBin], texts: &Texts) -> ChartSpec {
    ChartSpec {
        id: STAY_LENGTH,
        kind: ChartKind::Histogram,
        title: texts.stay_histogram_title.to_string(),
        x_label: texts.stay_axis.to_string(),
        y_label: texts.reservations_axis.to_string(),
        x: AxisValues::Numbers(bins.iter().map(|bin| f64::from(bin.stay_length)).collect()),
        y: bins.iter().map(|bin| Some(bin.reservations as f64)).collect(),
        color: None,
    }
}

/// Revenue per check-in day as a time series.
pub fn daily_revenue_chart(daily: &[DailyAggregate], texts: &Texts) -> ChartSpec {
    ChartSpec {
        id: DAILY_REVENUE,
        kind: ChartKind::Line,
        title: texts.daily_revenue_title.to_string(),
        x_label: texts.day_axis.to_string(),
        y_label: texts.revenue_axis.to_string(),
        x: AxisValues::Labels(daily.iter().map(|day| day.date.to_string()).collect()),
        y: daily.iter().map(|day| Some(day.revenue)).collect(),
        color: None,
    }
}

fn peak_share_color(daily: &[DailyAggregate], texts: &Texts) -> ColorSeries {
    ColorSeries::Scale {
        label: texts.peak_share_label.to_string(),
        values: daily.iter().map(|day| day.peak_share).collect(),
    }
}

fn highlighted_title(title: &str, peak_days: &PeakDays, locale: Locale) -> String {
    let texts = Texts::for_locale(locale);
    format!("{} ({}: {})", title, texts.highlighted, peak_days.describe(locale))
}

/// Reservations per check-in day, colored by the share of peak-day check-ins.
pub fn daily_reservations_chart(
    daily: &[DailyAggregate],
    peak_days: &PeakDays,
    locale: Locale,
) -> ChartSpec {
    let texts = Texts::for_locale(locale);
    ChartSpec {
        id: DAILY_RESERVATIONS,
        kind: ChartKind::Bar,
        title: highlighted_title(texts.daily_reservations_title, peak_days, locale),
        x_label: texts.day_axis.to_string(),
        y_label: texts.reservations_axis.to_string(),
        x: AxisValues::Labels(daily.iter().map(|day| format_day_month(day.date)).collect()),
        y: daily.iter().map(|day| Some(day.reservations as f64)).collect(),
        color: Some(peak_share_color(daily, texts)),
    }
}

/// Highest daily rate booked per check-in day.
pub fn daily_peak_rate_chart(
    daily: &[DailyAggregate],
    peak_days: &PeakDays,
    locale: Locale,
) -> ChartSpec {
    let texts = Texts::for_locale(locale);
    ChartSpec {
        id: DAILY_PEAK_RATE,
        kind: ChartKind::Bar,
        title: highlighted_title(texts.daily_peak_rate_title, peak_days, locale),
        x_label: texts.day_axis.to_string(),
        y_label: texts.daily_rate_axis.to_string(),
        x: AxisValues::Labels(daily.iter().map(|day| format_day_month(day.date)).collect()),
        y: daily.iter().map(|day| day.top_daily_rate).collect(),
        color: Some(peak_share_color(daily, texts)),
    }
}

/// Mean daily rate per check-in day; days with only zero-length stays are gaps.
pub fn daily_average_rate_chart(daily: &[DailyAggregate], texts: &Texts) -> ChartSpec {
    ChartSpec {
        id: DAILY_AVERAGE_RATE,
        kind: ChartKind::Line,
        title: texts.daily_average_rate_title.to_string(),
        x_label: texts.day_axis.to_string(),
        y_label: texts.daily_rate_axis.to_string(),
        x: AxisValues::Labels(daily.iter().map(|day| day.date.to_string()).collect()),
        y: daily.iter().map(|day| day.average_daily_rate).collect(),
        color: None,
    }
}

fn weekday_labels(weekdays: &[WeekdayAggregate], locale: Locale) -> AxisValues {
    AxisValues::Labels(
        weekdays
            .iter()
            .map(|day| day.weekday.label(locale).to_string())
            .collect(),
    )
}

/// Reservations per check-in weekday.
pub fn weekday_reservations_chart(weekdays: &[WeekdayAggregate], locale: Locale) -> ChartSpec {
    let texts = Texts::for_locale(locale);
    ChartSpec {
        id: WEEKDAY_RESERVATIONS,
        kind: ChartKind::Bar,
        title: texts.weekday_reservations_title.to_string(),
        x_label: texts.weekday_axis.to_string(),
        y_label: texts.reservations_axis.to_string(),
        x: weekday_labels(weekdays, locale),
        y: weekdays.iter().map(|day| Some(day.reservations as f64)).collect(),
        color: Some(ColorSeries::Category),
    }
}

/// Revenue per check-in weekday.
pub fn weekday_revenue_chart(weekdays: &[WeekdayAggregate], locale: Locale) -> ChartSpec {
    let texts = Texts::for_locale(locale);
    ChartSpec {
        id: WEEKDAY_REVENUE,
        kind: ChartKind::Bar,
        title: texts.weekday_revenue_title.to_string(),
        x_label: texts.weekday_axis.to_string(),
        y_label: texts.total_revenue_axis.to_string(),
        x: weekday_labels(weekdays, locale),
        y: weekdays.iter().map(|day| Some(day.revenue)).collect(),
        color: Some(ColorSeries::Category),
    }
}
