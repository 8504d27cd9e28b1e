//! Numeric parsing and suffix stripping.
//!
//! Only plain decimal literals count as numbers: an optional sign, digits
//! with an optional decimal point, and an optional exponent. Words such as
//! `inf` or `nan` and thousands separators are rejected so that they stay
//! text.

use tabclean_model::{CleanOptions, SuffixKind};

/// Returns true if `value` is a plain decimal literal.
fn is_decimal_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let mut digits = 0;
    let mut seen_point = false;
    while idx < bytes.len() {
        match bytes[idx] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        idx += 1;
    }
    if digits == 0 {
        return false;
    }

    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        idx += 1;
        if matches!(bytes.get(idx), Some(b'+' | b'-')) {
            idx += 1;
        }
        let start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == start {
            return false;
        }
    }

    idx == bytes.len()
}

/// Parse a string as a finite decimal number.
///
/// Surrounding whitespace is ignored. Returns None for anything that is not
/// a plain decimal literal.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check if a string is a whole number that fits in 64 bits.
pub fn is_integer(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && trimmed.parse::<i64>().is_ok()
}

/// Check if a string is a finite decimal number.
pub fn is_decimal(value: &str) -> bool {
    parse_decimal(value).is_some()
}

/// Render a number for the given suffix kind.
///
/// Multipliers use the shortest form (`20.8`, `3`); percentages always keep at
/// least one decimal place (`29.0`).
pub fn format_number(value: f64, kind: SuffixKind) -> String {
    let rendered = value.to_string();
    match kind {
        SuffixKind::Multiplier => rendered,
        SuffixKind::Percent if rendered.contains('.') => rendered,
        SuffixKind::Percent => format!("{rendered}.0"),
    }
}

/// Strip a configured numeric suffix and return the normalized number.
///
/// Returns None when the value has no configured suffix or the remainder is
/// not a number; the caller keeps the original text in that case.
pub fn strip_numeric_suffix(value: &str, options: &CleanOptions) -> Option<String> {
    let suffix = options.suffix_for(value)?;
    let last = value.chars().next_back()?;
    let remainder = &value[..value.len() - last.len_utf8()];
    let number = parse_decimal(remainder)?;
    Some(format_number(number, suffix.kind))
}

/// Count digits before and after the decimal point of a numeric literal.
///
/// Leading zeros of the integer part are ignored, but at least one integer
/// digit is reported. Literals with an exponent are measured in expanded form.
pub fn digit_counts(value: &str) -> (usize, usize) {
    let trimmed = value.trim();
    let expanded;
    let literal = if trimmed.contains(['e', 'E']) {
        expanded = parse_decimal(trimmed).map(|v| v.abs().to_string());
        expanded.as_deref().unwrap_or(trimmed)
    } else {
        trimmed
    };
    let unsigned = literal.trim_start_matches(['+', '-']);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let integer_digits = integer.trim_start_matches('0').len().max(1);
    (integer_digits, fraction.len())
}
