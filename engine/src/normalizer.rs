// Numeric normalization of spreadsheet cells (pt-BR currency text or plain numbers)
use shared::models::RawValue;

/// Converts a cell into a canonical f64. Never fails: anything unparseable becomes 0.
pub fn normalize(value: &RawValue) -> f64 {
    normalize_checked(value).unwrap_or(0.0)
}

/// Like [`normalize`], but reports non-empty text that yields no number as `None`
/// so callers can surface a warning. Absent and empty cells are `Some(0.0)`.
pub fn normalize_checked(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Empty => Some(0.0),
        RawValue::Number(n) => Some(*n),
        RawValue::Text(s) if s.is_empty() => Some(0.0),
        // "-0,00" is zero, not negative zero.
        RawValue::Text(s) => leading_float(&clean_text(s)).map(|n| if n == 0.0 { 0.0 } else { n }),
    }
}

// Drops the currency marker, whitespace (including NBSP) and the '.' thousands separator,
// then turns the first ',' into the decimal point.
fn clean_text(s: &str) -> String {
    let stripped: String = s
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();
    stripped.replacen(',', ".", 1)
}

// Longest leading float literal: [+-]digits[.digits][(e|E)[+-]digits]. Trailing text such as
// a '%' sign is ignored.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
