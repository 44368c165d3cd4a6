use crate::calendar::Locale;
use chrono::NaiveDate;
use num_format::ToFormattedString;

/// Currency of the revenue column.
pub const CURRENCY_SYMBOL: &str = "R$";

fn number_locale(locale: Locale) -> num_format::Locale {
    match locale {
        Locale::PtBr => num_format::Locale::pt,
        Locale::En => num_format::Locale::en,
    }
}

/// Formats `value` rounded to `decimals` places with the locale's thousands
/// separator and decimal mark.
pub fn format_decimal(value: f64, decimals: u32, locale: Locale) -> String {
    let scale = 10_u64.pow(decimals);
    let scaled = (value * scale as f64).round();
    let sign = if scaled < 0.0 { "-" } else { "" };
    let scaled = scaled.abs() as u64;

    let number_locale = number_locale(locale);
    let mut formatted = format!(
        "{}{}",
        sign,
        (scaled / scale).to_formatted_string(&number_locale)
    );

    if decimals > 0 {
        formatted.push_str(number_locale.decimal());
        formatted.push_str(&format!(
            "{:0width$}",
            scaled % scale,
            width = decimals as usize
        ));
    }

    formatted
}

/// Money amount with two decimals, e.g. `R$ 1.234,57`.
pub fn format_currency(value: f64, locale: Locale) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_decimal(value, 2, locale))
}

/// Day-first short date used on daily chart axes, e.g. `20/11`.
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}
