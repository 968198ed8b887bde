/// Checks whether raw field text is an acceptable in-progress decimal.
///
/// Accepts the empty string and anything of the shape `digits`, an optional
/// single `.`, then optional digits (`"12"`, `"12."`, `".5"`, `"."`). Signs,
/// exponents, whitespace and a second `.` are refused.
///
/// # Example
///
/// ```
/// use font_size_converter_wasm::input_utils::is_decimal_input;
/// assert!(is_decimal_input("12.5"));
/// assert!(!is_decimal_input("-5"));
/// ```
pub fn is_decimal_input(text: &str) -> bool {
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Parses accepted field text into a finite number.
///
/// Returns `None` for text that passed the filter but is not a number yet,
/// such as `""` or a lone `"."`, and for digit runs too long to be finite.
pub fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !is_decimal_input(text) {
        return None;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts() {
        for ok in ["", "12", "12.5", ".5", "12.", ".", "007"] {
            assert!(is_decimal_input(ok), "expected {:?} to be accepted", ok);
        }
    }

    #[test]
    fn test_filter_rejects() {
        for bad in ["abc", "12.5.6", "-5", "+5", "1e3", " 12", "12px", "1,5"] {
            assert!(!is_decimal_input(bad), "expected {:?} to be rejected", bad);
        }
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12"), Some(12.0));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("12."), Some(12.0));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_parse_decimal_overflow_is_not_a_number() {
        let huge = "9".repeat(400);
        assert!(is_decimal_input(&huge));
        assert_eq!(parse_decimal(&huge), None);
    }
}
