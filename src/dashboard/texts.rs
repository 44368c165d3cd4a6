use crate::calendar::Locale;

/// Fixed dashboard wording for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Texts {
    pub dashboard_title: &'static str,
    pub adr_current: &'static str,
    pub adr_future: &'static str,
    pub stay_current: &'static str,
    pub stay_future: &'static str,
    pub stay_unit: &'static str,
    pub no_data: &'static str,

    pub stay_histogram_title: &'static str,
    pub stay_axis: &'static str,
    pub reservations_axis: &'static str,
    pub daily_revenue_title: &'static str,
    pub day_axis: &'static str,
    pub revenue_axis: &'static str,
    pub daily_reservations_title: &'static str,
    pub daily_peak_rate_title: &'static str,
    pub daily_average_rate_title: &'static str,
    pub daily_rate_axis: &'static str,
    pub peak_share_label: &'static str,
    pub weekday_reservations_title: &'static str,
    pub weekday_revenue_title: &'static str,
    pub weekday_axis: &'static str,
    pub total_revenue_axis: &'static str,
    pub highlighted: &'static str,

    pub current_period: &'static str,
    pub future_period: &'static str,
    /// `{}` is replaced by the number of zero-length stays
    pub undefined_rates_note: &'static str,
    /// `{}` is replaced by the period name
    pub empty_period_note: &'static str,
}

const PT_BR: Texts = Texts {
    dashboard_title: "Charlie Pricing Dashboard",
    adr_current: "ADR Atual",
    adr_future: "ADR Futuro",
    stay_current: "Estadia Atual",
    stay_future: "Estadia Futura",
    stay_unit: "dias",
    no_data: "sem dados",

    stay_histogram_title: "Distribuição da Quantidade de Dias Reservados",
    stay_axis: "Estadia",
    reservations_axis: "Reservas",
    daily_revenue_title: "Faturamento Diário",
    day_axis: "Dia",
    revenue_axis: "Receita (R$)",
    daily_reservations_title: "Quantidade de reservas por dia",
    daily_peak_rate_title: "Maior diária por dia",
    daily_average_rate_title: "Preço médio por dia",
    daily_rate_axis: "Diária (R$)",
    peak_share_label: "Dias de pico",
    weekday_reservations_title: "Dias Mais Requisitados",
    weekday_revenue_title: "Dias que mais geram receita",
    weekday_axis: "Dia da Semana",
    total_revenue_axis: "Receita Total (R$)",
    highlighted: "destaque",

    current_period: "atual",
    future_period: "futuro",
    undefined_rates_note: "{} reserva(s) com estadia de zero dias sem diária definida, fora das métricas de diária",
    empty_period_note: "Nenhuma reserva no período {}",
};

const EN: Texts = Texts {
    dashboard_title: "Charlie Pricing Dashboard",
    adr_current: "Current ADR",
    adr_future: "Future ADR",
    stay_current: "Current Stay",
    stay_future: "Future Stay",
    stay_unit: "days",
    no_data: "no data",

    stay_histogram_title: "Distribution of Booked Nights",
    stay_axis: "Stay",
    reservations_axis: "Reservations",
    daily_revenue_title: "Daily Revenue",
    day_axis: "Day",
    revenue_axis: "Revenue (R$)",
    daily_reservations_title: "Reservations per day",
    daily_peak_rate_title: "Highest daily rate per day",
    daily_average_rate_title: "Average daily rate per day",
    daily_rate_axis: "Daily rate (R$)",
    peak_share_label: "Peak days",
    weekday_reservations_title: "Most Requested Days",
    weekday_revenue_title: "Days Generating the Most Revenue",
    weekday_axis: "Day of Week",
    total_revenue_axis: "Total Revenue (R$)",
    highlighted: "highlighted",

    current_period: "current",
    future_period: "future",
    undefined_rates_note: "{} reservation(s) with zero-night stays have no daily rate and are left out of rate metrics",
    empty_period_note: "No reservations in the {} period",
};

impl Texts {
    pub fn for_locale(locale: Locale) -> &'static Texts {
        match locale {
            Locale::PtBr => &PT_BR,
            Locale::En => &EN,
        }
    }

    /// Data-quality note for zero-length stays.
    pub fn undefined_rates_warning(&self, count: usize) -> String {
        self.undefined_rates_note.replace("{}", &count.to_string())
    }

    /// Data-quality note for a segment with no reservations.
    pub fn empty_period_warning(&self, period: &str) -> String {
        self.empty_period_note.replace("{}", period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_by_locale() {
        assert_eq!(Texts::for_locale(Locale::PtBr).adr_current, "ADR Atual");
        assert_eq!(Texts::for_locale(Locale::En).adr_current, "Current ADR");
    }

    #[test]
    fn test_warnings_are_localized() {
        let pt = Texts::for_locale(Locale::PtBr);
        let en = Texts::for_locale(Locale::En);
        assert_eq!(pt.empty_period_warning(pt.future_period), "Nenhuma reserva no período futuro");
        assert_eq!(en.empty_period_warning(en.future_period), "No reservations in the future period");
        assert!(en.undefined_rates_warning(2).starts_with("2 reservation(s)"));
    }
}
