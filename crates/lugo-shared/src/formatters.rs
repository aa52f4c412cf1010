//! Display formatters for documents and money (pt-BR conventions).
//!
//! The masking formatters work on the digit-only projection of their input
//! and accept partial values, so they can be re-applied on every keystroke.

use crate::validators::only_digits;

/// Separator between `R$` and the amount, as emitted by the pt-BR locale.
pub const CURRENCY_SPACE: char = '\u{a0}';

/// `XXX` → `XXX.XXX` → `XXX.XXX.XXX` → `XXX.XXX.XXX-XX`
pub fn format_tax_id(input: &str) -> String {
    let digits: String = only_digits(input).chars().take(11).collect();
    let n = digits.len();
    match n {
        0..=3 => digits,
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// `XX` → `(XX) XXXX` → `(XX) XXXX-XXXX` → `(XX) XXXXX-XXXX`
pub fn format_phone(input: &str) -> String {
    let digits = only_digits(input);
    let n = digits.len();
    match n {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11]),
    }
}

/// `XXXXX` → `XXXXX-XXX`
pub fn format_postal_code(input: &str) -> String {
    let digits = only_digits(input);
    if digits.len() <= 5 {
        return digits;
    }
    let end = digits.len().min(8);
    format!("{}-{}", &digits[..5], &digits[5..end])
}

fn group_thousands(units: u64) -> String {
    let raw = units.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Formats an amount held in cents.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}R${}{},{:02}",
        sign,
        CURRENCY_SPACE,
        group_thousands(abs / 100),
        abs % 100
    )
}

/// Formats a decimal amount as BRL, e.g. `1234.5` → `R$ 1.234,50`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format_cents(0);
    }
    format_cents((value * 100.0).round() as i64)
}

/// Live input masking: the digits typed so far are read as cents,
/// e.g. `"100000"` → `R$ 1.000,00`.
pub fn format_currency_input(raw: &str) -> String {
    format_cents(parse_cents(raw))
}

fn parse_cents(formatted: &str) -> i64 {
    only_digits(formatted)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d as i64))
}

/// Inverse of [`format_currency`]: drops everything but digits and divides by 100.
pub fn parse_currency(formatted: &str) -> f64 {
    parse_cents(formatted) as f64 / 100.0
}

/// True when a pre-formatted amount is absent, blank or worth zero.
pub fn is_zero_currency(formatted: &str) -> bool {
    parse_cents(formatted) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tax_id_progressive() {
        assert_eq!(format_tax_id("123"), "123");
        assert_eq!(format_tax_id("123456"), "123.456");
        assert_eq!(format_tax_id("123456789"), "123.456.789");
        assert_eq!(format_tax_id("12345678909"), "123.456.789-09");
        assert_eq!(format_tax_id("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_tax_id("1234567890999"), "123.456.789-09");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119876"), "(11) 9876");
        assert_eq!(format_phone("1134567890"), "(11) 3456-7890");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1198765"), "(11) 9876-5");
    }

    #[test]
    fn test_format_postal_code() {
        assert_eq!(format_postal_code("01310"), "01310");
        assert_eq!(format_postal_code("01310100"), "01310-100");
        assert_eq!(format_postal_code("013101"), "01310-1");
    }

    #[test]
    fn test_format_currency() {
        assert!(format_currency(1000.0).contains("1.000,00"));
        assert!(format_currency(1234.56).contains("1.234,56"));
        assert!(format_currency(0.0).contains("0,00"));
        assert!(format_currency(99.99).contains("99,99"));
        assert_eq!(format_currency(1_234_567.8), "R$\u{a0}1.234.567,80");
        assert_eq!(format_currency(-5.0), "-R$\u{a0}5,00");
    }

    #[test]
    fn test_format_currency_input() {
        assert!(format_currency_input("100000").contains("1.000,00"));
        assert!(format_currency_input("").contains("0,00"));
    }

    #[test]
    fn test_parse_currency_recovers_amounts() {
        for n in [0.0, 0.01, 9.99, 100.0, 1234.56, 98765.43, 1_000_000.0] {
            let parsed = parse_currency(&format_currency(n));
            assert!((parsed - n).abs() < 0.005, "{} != {}", parsed, n);
        }
        assert_eq!(parse_currency("R$ 1.500,75"), 1500.75);
        assert_eq!(parse_currency(""), 0.0);
    }

    #[test]
    fn test_is_zero_currency() {
        assert!(is_zero_currency("R$ 0,00"));
        assert!(is_zero_currency(&format_currency(0.0)));
        assert!(is_zero_currency(""));
        assert!(!is_zero_currency("R$ 0,01"));
    }
}
