//! Number and revenue parsing. Every failure normalizes to `0.0`.

use crate::records::LooseValue;

const CURRENCY_SYMBOLS: [char; 5] = ['$', '€', '£', '₹', '¥'];

// Longest suffix first so "MM" is not read as "M".
const MAGNITUDE_SUFFIXES: [(&str, f64); 10] = [
    ("THOUSAND", 1e3),
    ("MILLION", 1e6),
    ("BILLION", 1e9),
    ("MM", 1e6),
    ("MN", 1e6),
    ("BN", 1e9),
    ("K", 1e3),
    ("M", 1e6),
    ("B", 1e9),
    ("T", 1e12),
];

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Plain numeric reading of a loosely typed field.
pub fn normalize_number(value: Option<&LooseValue>) -> f64 {
    match value {
        None => 0.0,
        Some(LooseValue::Number(n)) => finite_or_zero(*n),
        Some(LooseValue::Text(s)) => parse_number_text(s),
    }
}

pub fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Revenue reading: like [`normalize_number`], but text may be human formatted.
pub fn parse_revenue(value: Option<&LooseValue>) -> f64 {
    match value {
        None => 0.0,
        Some(LooseValue::Number(n)) => finite_or_zero(*n),
        Some(LooseValue::Text(s)) => parse_revenue_text(s),
    }
}

/// Parses strings such as `"$1.2M"`, `"USD 3,400,000"` or `"2.5 bn"`.
pub fn parse_revenue_text(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect::<String>()
        .to_ascii_uppercase();
    let cleaned = cleaned.strip_prefix("USD").unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return 0.0;
    }

    let (digits, multiplier) = MAGNITUDE_SUFFIXES
        .iter()
        .find_map(|(suffix, multiplier)| {
            cleaned
                .strip_suffix(suffix)
                .map(|digits| (digits, *multiplier))
        })
        .unwrap_or((cleaned, 1.0));

    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => finite_or_zero(n * multiplier),
        _ => 0.0,
    }
}
