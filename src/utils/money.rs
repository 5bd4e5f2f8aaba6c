//! Amount parsing and display formatting.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

/// Parses a request amount. Clients send amounts as either a JSON number
/// or a string (form inputs arrive as strings), so both are accepted.
pub fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => n.as_f64().and_then(Decimal::from_f64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Formats an amount with thousands separators, `toLocaleString` style:
/// `50000` -> `50,000`, `1234567.5` -> `1,234,567.5`.
pub fn format_grouped(amount: Decimal) -> String {
    let normalized = amount.normalize().to_string();
    let (number, fraction) = match normalized.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), Some(frac.to_string())),
        None => (normalized, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numbers_and_numeric_strings() {
        assert_eq!(parse_amount(&json!(100000)), Some(Decimal::from(100_000)));
        assert_eq!(parse_amount(&json!(100.5)), Some("100.5".parse().unwrap()));
        assert_eq!(
            parse_amount(&json!("99999.99")),
            Some("99999.99".parse().unwrap())
        );
        assert_eq!(parse_amount(&json!(" 50000 ")), Some(Decimal::from(50_000)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(parse_amount(&json!("plenty")), None);
        assert_eq!(parse_amount(&json!("")), None);
        assert_eq!(parse_amount(&json!(null)), None);
        assert_eq!(parse_amount(&json!({"amount": 5})), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(Decimal::from(500)), "500");
        assert_eq!(format_grouped(Decimal::from(50_000)), "50,000");
        assert_eq!(format_grouped(Decimal::from(1_234_567)), "1,234,567");
    }

    #[test]
    fn keeps_fractions_and_sign() {
        assert_eq!(
            format_grouped("1234567.5".parse().unwrap()),
            "1,234,567.5"
        );
        assert_eq!(format_grouped("-50000".parse().unwrap()), "-50,000");
    }

    #[test]
    fn drops_trailing_zero_fractions() {
        assert_eq!(format_grouped("50000.00".parse().unwrap()), "50,000");
    }
}
