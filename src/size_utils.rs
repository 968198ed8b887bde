/// Pixels per typographic point, assuming a 96 DPI screen (96 / 72).
pub const PX_PER_PT: f64 = 1.3333333333;

/// Rounds to the nearest integer with ties going toward positive infinity.
///
/// This matches `Math.round` in the browser, which differs from
/// [`f64::round`] for negative halves (`-2.5` rounds to `-2`, not `-3`).
pub fn js_round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Converts points to whole pixels.
///
/// # Example
///
/// ```
/// use font_size_converter_wasm::size_utils::pt_to_px;
/// assert_eq!(pt_to_px(12.0), 16.0);
/// ```
pub fn pt_to_px(pt: f64) -> f64 {
    js_round(pt * PX_PER_PT)
}

/// Converts pixels to points, rounded to two decimal places.
pub fn px_to_pt(px: f64) -> f64 {
    js_round((px / PX_PER_PT) * 100.0) / 100.0
}

/// Formats a number the way it is shown in the input fields.
///
/// Whole values print without a fractional part (`16`, not `16.0`) and
/// negative zero prints as `0`. Below `1e21` this is the same text the
/// browser shows; past that the output stays in plain digits instead of
/// switching to exponent form, so it still passes the field input filter.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0
        return "0".into();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pt_to_px_matches_formula() {
        for i in 0..=1000 {
            let pt = i as f64 * 10.0;
            assert_eq!(pt_to_px(pt), js_round(pt * 1.3333333333));
        }
        assert_eq!(pt_to_px(12.0), 16.0);
        assert_eq!(pt_to_px(10.0), 13.0);
        assert_eq!(pt_to_px(0.0), 0.0);
    }

    #[test]
    fn test_px_to_pt_matches_formula() {
        for i in 0..=1000 {
            let px = i as f64 * 10.0;
            assert_eq!(px_to_pt(px), js_round(px / 1.3333333333 * 100.0) / 100.0);
        }
        assert_eq!(px_to_pt(20.0), 15.0);
        assert_eq!(px_to_pt(13.0), 9.75);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let px = pt_to_px(12.0);
        assert_eq!(px, 16.0);
        assert!((px_to_pt(px) - 12.0).abs() <= 0.01);
    }

    #[test]
    fn test_js_round_ties() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(-2.6), -3.0);
        assert_eq!(js_round(0.4), 0.0);
    }

    #[test]
    fn test_negative_input_passes_through() {
        assert_eq!(pt_to_px(-12.0), -16.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(12.75), "12.75");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(9.0), "9");
    }

    #[test]
    fn test_format_number_large_values_stay_plain_digits() {
        let shown = format_number(pt_to_px(1e21));
        assert!(!shown.contains('e'));
        assert!(shown.starts_with("13333333333"));
        assert!(crate::input_utils::is_decimal_input(&shown));
    }
}
