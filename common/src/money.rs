//! Currency formatting in the Indian numbering system.
//!
//! Amounts arrive as JSON numbers, so everything here works on `f64` and rounds
//! the exact binary value, with exact ties going away from zero.

pub const CURRENCY_GLYPH: &str = "₹";

/// Fraction digits used by the default grouped number format.
const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

/// Fixed-point text for `value`, like `Number.prototype.toFixed`.
///
/// No grouping is applied: `to_fixed(1500.0, 2) == "1500.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite_text(value);
    }
    let mut magnitude = value.abs();
    if is_exact_tie(magnitude, digits) {
        // nudge to the next representable value so the tie rounds up
        magnitude = f64::from_bits(magnitude.to_bits() + 1);
    }
    let body = format!("{:.*}", digits, magnitude);
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

/// Groups the digits of a plain fixed-point string: `"1234567.50"` -> `"12,34,567.50"`.
pub fn group_indian(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return fixed.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 2);
    if integer.len() > 3 {
        let (head, tail) = integer.split_at(integer.len() - 3);
        let first_group = head.len() % 2;
        if first_group > 0 {
            grouped.push_str(&head[..first_group]);
        }
        for pair in head.as_bytes()[first_group..].chunks(2) {
            if !grouped.is_empty() {
                grouped.push(',');
            }
            grouped.extend(pair.iter().map(|&b| b as char));
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(integer);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Default `en-IN` number format: grouped, at most three fraction digits, no trailing zeros.
pub fn format_indian_number(value: f64) -> String {
    if !value.is_finite() {
        return non_finite_text(value);
    }
    let fixed = to_fixed(value, DEFAULT_MAX_FRACTION_DIGITS);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        return "0".to_string();
    }
    group_indian(trimmed)
}

/// Grouped amount with exactly two decimals: `3000.0` -> `"3,000.00"`.
pub fn format_indian_amount(value: f64) -> String {
    group_indian(&to_fixed(value, 2))
}

/// `"₹3,000.00"`
pub fn format_rupees(value: f64) -> String {
    format!("{CURRENCY_GLYPH}{}", format_indian_amount(value))
}

/// `"₹1,499.5"`: unit prices keep their own precision.
pub fn format_rupee_rate(value: f64) -> String {
    format!("{CURRENCY_GLYPH}{}", format_indian_number(value))
}

/// `"₹1500.00"`: ungrouped, as used in share messages.
pub fn format_rupees_plain(value: f64) -> String {
    format!("{CURRENCY_GLYPH}{}", to_fixed(value, 2))
}

// Exact ties only exist for dyadic values, whose decimal expansion is short enough
// to print in full at this precision.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let expanded = format!("{:.64}", magnitude);
    let Some((_, fraction)) = expanded.split_once('.') else {
        return false;
    };
    let Some(rest) = fraction.get(digits..) else {
        return false;
    };
    rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0')
}

fn non_finite_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}
