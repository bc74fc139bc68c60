/// Number of fractional digits kept when a number is printed.
pub const DISPLAY_PRECISION: usize = 6;

/// Formats a number for display.
///
/// The value is rendered with [`DISPLAY_PRECISION`] fractional digits, then
/// trailing zeros are removed, and the decimal point with them when nothing
/// follows it. Non-finite values keep their standard spelling.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// - The display text of `value`.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.precision$}", precision = DISPLAY_PRECISION);
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_the_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn fractions_keep_six_digits_at_most() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(2.0 / 3.0), "0.666667");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(0.000_000_1), "0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
