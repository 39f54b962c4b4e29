use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::MonthKey;
use crate::errors::ValidationError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Rioplatense convention: comma decimals, dot grouping.
    pub fn spanish_argentina() -> Self {
        Self {
            language_tag: "es-AR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    fn spanish(&self) -> bool {
        self.language_tag.starts_with("es")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "ARS" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "BRL" => "R$".into(),
        "CLP" => "CLP".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "CLP" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders an amount with the currency symbol, locale separators and the
/// currency's minor-unit precision.
pub fn format_amount(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u8) -> String {
    let rendered = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };
    let mut body = group_digits(int_part, locale.grouping_separator);
    if let Some(frac_part) = frac_part {
        body.push(locale.decimal_separator);
        body.push_str(frac_part);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", sign, grouped)
}

/// Parses user-typed currency input in the given locale: optional sign,
/// optional grouping separators, at most one decimal separator. Currency
/// symbols are not accepted; forms submit bare numbers.
pub fn parse_amount(raw: &str, locale: &LocaleConfig) -> Result<Decimal, ValidationError> {
    let unparsable = || ValidationError::UnparsableAmount(raw.to_string());
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(unparsable());
    }
    let mut normalized = String::with_capacity(trimmed.len());
    let mut seen_decimal = false;
    for ch in trimmed.chars() {
        if ch == locale.grouping_separator && !seen_decimal {
            continue;
        } else if ch == locale.decimal_separator {
            if seen_decimal {
                return Err(unparsable());
            }
            seen_decimal = true;
            normalized.push('.');
        } else if ch.is_ascii_digit() || (normalized.is_empty() && (ch == '-' || ch == '+')) {
            normalized.push(ch);
        } else {
            return Err(unparsable());
        }
    }
    normalized.parse::<Decimal>().map_err(|_| unparsable())
}

/// Human heading for a month, e.g. "January 2024" / "enero de 2024".
pub fn month_label(month: MonthKey, locale: &LocaleConfig) -> String {
    let index = (month.month() - 1) as usize;
    if locale.spanish() {
        format!("{} de {}", SPANISH_MONTHS[index], month.year())
    } else {
        format!("{} {}", ENGLISH_MONTHS[index], month.year())
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const SPANISH_MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn formats_with_grouping_and_symbol() {
        let formatted = format_amount(dec("1234567.5"), &CurrencyCode::new("USD"), &LocaleConfig::default());
        assert_eq!(formatted, "$1,234,567.50");
    }

    #[test]
    fn formats_negative_amounts_with_leading_sign() {
        let formatted = format_amount(dec("-42.10"), &CurrencyCode::new("EUR"), &LocaleConfig::default());
        assert_eq!(formatted, "-€42.10");
    }

    #[test]
    fn formats_zero_minor_unit_currencies_without_decimals() {
        let formatted = format_amount(dec("1500"), &CurrencyCode::new("JPY"), &LocaleConfig::default());
        assert_eq!(formatted, "¥1,500");
    }

    #[test]
    fn argentine_locale_swaps_separators() {
        let locale = LocaleConfig::spanish_argentina();
        let formatted = format_amount(dec("9876.54"), &CurrencyCode::new("ARS"), &locale);
        assert_eq!(formatted, "$9.876,54");
    }

    #[test]
    fn parses_grouped_locale_input() {
        let locale = LocaleConfig::spanish_argentina();
        assert_eq!(parse_amount("1.234,56", &locale).unwrap(), dec("1234.56"));
        assert_eq!(parse_amount(" 150 ", &locale).unwrap(), dec("150"));
        assert_eq!(parse_amount("0,10", &locale).unwrap(), dec("0.10"));
    }

    #[test]
    fn parse_and_format_round_trip_at_currency_precision() {
        let locale = LocaleConfig::default();
        let parsed = parse_amount("1,234.50", &locale).unwrap();
        assert_eq!(format_number(&locale, parsed, 2), "1,234.50");
    }

    #[test]
    fn rejects_garbage_input() {
        let locale = LocaleConfig::default();
        for raw in ["", "  ", "12..5", "12.3.4", "abc", "12a", "1,2,3.4.5"] {
            assert!(parse_amount(raw, &locale).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn month_labels_follow_the_language_tag() {
        let month: MonthKey = "2024-01".parse().unwrap();
        assert_eq!(month_label(month, &LocaleConfig::default()), "January 2024");
        assert_eq!(
            month_label(month, &LocaleConfig::spanish_argentina()),
            "enero de 2024"
        );
    }
}
