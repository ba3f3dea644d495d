//! Brazilian money token parsing and formatting.

use rust_decimal::Decimal;

/// Parse a Brazilian-formatted money token into a [`Decimal`].
///
/// Accepts `1.234,56`, `925,00`, `1518` and an optional `R$` prefix.
/// The thousands separator is stripped first, then the decimal comma is
/// swapped for a dot. Returns `None` for anything that does not survive
/// that normalization, keeping "not present" distinct from "zero".
pub fn parse_money(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().trim_start_matches("R$").trim();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = cleaned.replace('.', "").replace(',', ".");
    normalized.parse::<Decimal>().ok()
}

/// Format an amount in Brazilian style (1.234,56).
pub fn format_money(amount: Decimal) -> String {
    let s = format!("{:.2}", amount);
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 2 {
        return s;
    }

    let integer_part = parts[0];
    let decimal_part = parts[1];

    // Add thousand separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}
