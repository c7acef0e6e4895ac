//! Display formatting for amounts, points, and percentages.
//!
//! This is the only place values are rounded. Rounded row amounts may not
//! add up to the rounded pool total; a cent of drift per row is expected.

use klimrod_types::Amount;

/// Round to whole cents.
pub fn round_cents(amount: Amount) -> Amount {
    (amount * 100.0).round() / 100.0
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Split a fixed-precision rendering into sign, grouped integer part and
/// fraction.
fn grouped(value: f64, decimals: usize) -> (bool, String, String) {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let negative = value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, group_thousands(int_part), frac_part.to_string())
}

/// `1234.5` → `"$1,234.50"`, `-3.0` → `"-$3.00"`.
pub fn format_currency(amount: Amount) -> String {
    let (negative, int_part, frac_part) = grouped(amount, 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${int_part}.{frac_part}")
}

/// Grouped points with up to two decimals, trailing zeros trimmed.
pub fn format_points(points: f64) -> String {
    let (negative, int_part, frac_part) = grouped(points, 2);
    let sign = if negative { "-" } else { "" };
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac}")
    }
}

/// One-decimal percentage, e.g. `"12.5%"`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Like [`format_percentage`], with `"-"` for a missing value.
pub fn format_optional_percentage(percentage: Option<f64>) -> String {
    percentage.map_or_else(|| "-".to_string(), format_percentage)
}
