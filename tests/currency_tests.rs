use hearth_core::currency::{
    format_amount, minor_units_for, parse_amount, CurrencyCode, LocaleConfig,
};
use rust_decimal::Decimal;

#[test]
fn formats_currency_with_locale() {
    let locale = LocaleConfig {
        language_tag: "fr-FR".into(),
        decimal_separator: ',',
        grouping_separator: ' ',
    };
    let code = CurrencyCode::new("EUR");
    let formatted = format_amount("-1234.5".parse::<Decimal>().unwrap(), &code, &locale);
    assert_eq!(formatted, "-€1 234,50");
}

#[test]
fn parsed_form_input_survives_entry_precision() {
    let locale = LocaleConfig::spanish_argentina();
    let amount = parse_amount("12.345,67", &locale).unwrap();
    assert_eq!(amount, "12345.67".parse::<Decimal>().unwrap());
    assert_eq!(
        format_amount(amount, &CurrencyCode::new("ARS"), &locale),
        "$12.345,67"
    );
}

#[test]
fn parse_rejects_mixed_separator_garbage() {
    let locale = LocaleConfig::spanish_argentina();
    assert!(parse_amount("12,34,56", &locale).is_err());
    assert!(parse_amount("$100", &locale).is_err());
}

#[test]
fn minor_units_drive_precision() {
    assert_eq!(minor_units_for("JPY"), 0);
    assert_eq!(minor_units_for("USD"), 2);
    assert_eq!(minor_units_for("BHD"), 3);
    let formatted = format_amount(
        "2.5".parse::<Decimal>().unwrap(),
        &CurrencyCode::new("BHD"),
        &LocaleConfig::default(),
    );
    assert_eq!(formatted, "BHD2.500");
}
