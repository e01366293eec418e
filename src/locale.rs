// 🌎 Locale - decimal separator, date format and user-facing messages
// Only pt-BR ships; the struct keeps the strings out of the update logic

use crate::error::ValidationError;
use chrono::{DateTime, TimeZone};

/// Messages shown on the error line of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub empty_value: String,
    pub not_numeric: String,
    pub out_of_range: String,
    pub save_failed: String,
    pub remove_failed: String,
    pub load_failed: String,
}

pub const OVERFLOW_MARKER: &str = "###";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub date_format: String,
    pub currency_symbol: String,
    pub messages: Messages,
}

impl Locale {
    pub fn pt_br() -> Self {
        Self {
            decimal_separator: ',',
            date_format: "%d/%m/%Y".to_string(),
            currency_symbol: "R$".to_string(),
            messages: Messages {
                empty_value: "Insira um valor!".to_string(),
                not_numeric: "Insira um valor numérico!".to_string(),
                out_of_range: "Valor fora do limite!".to_string(),
                save_failed: "Erro ao salvar os dados.".to_string(),
                remove_failed: "Erro ao remover os dados.".to_string(),
                load_failed: "Erro ao buscar os dados.".to_string(),
            },
        }
    }

    pub fn validation_message(&self, err: ValidationError) -> &str {
        match err {
            ValidationError::EmptyValue => &self.messages.empty_value,
            ValidationError::NotNumeric => &self.messages.not_numeric,
            ValidationError::OutOfRange => &self.messages.out_of_range,
        }
    }

    /// Two fraction digits with the locale separator, e.g. `12.5` -> `"12,50"`.
    /// A sum that left the f64 range (only possible with hand-edited data)
    /// prints as `OVERFLOW_MARKER`.
    pub fn format_amount(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return OVERFLOW_MARKER.to_string();
        }

        // keep -0.0 (and tiny negatives that round to it) from printing "-0,00"
        let formatted = format!("{:.2}", amount);
        let formatted = if formatted == "-0.00" {
            "0.00".to_string()
        } else {
            formatted
        };

        formatted.replace('.', &self.decimal_separator.to_string())
    }

    pub fn format_date<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format(&self.date_format).to_string()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::pt_br()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    #[test]
    fn test_format_amount_uses_comma() {
        let locale = Locale::pt_br();

        assert_eq!(locale.format_amount(12.5), "12,50");
        assert_eq!(locale.format_amount(0.0), "0,00");
        assert_eq!(locale.format_amount(1234.567), "1234,57");
        assert_eq!(locale.format_amount(-4.1), "-4,10");
    }

    #[test]
    fn test_format_amount_negative_zero() {
        assert_eq!(Locale::pt_br().format_amount(-0.0), "0,00");
        assert_eq!(Locale::pt_br().format_amount(-0.001), "0,00");
    }

    #[test]
    fn test_format_amount_out_of_range() {
        let locale = Locale::pt_br();
        assert_eq!(locale.format_amount(f64::INFINITY), "###");
        assert_eq!(locale.format_amount(f64::NAN), "###");
    }

    #[test]
    fn test_format_date_day_first() {
        let locale = Locale::pt_br();
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        assert_eq!(locale.format_date(&at), "05/01/2025");

        let local = Local.with_ymd_and_hms(2024, 12, 31, 8, 30, 0).unwrap();
        assert_eq!(locale.format_date(&local), "31/12/2024");
    }

    #[test]
    fn test_validation_messages() {
        let locale = Locale::default();
        assert_eq!(locale.validation_message(ValidationError::EmptyValue), "Insira um valor!");
        assert_eq!(
            locale.validation_message(ValidationError::NotNumeric),
            "Insira um valor numérico!"
        );
    }
}
