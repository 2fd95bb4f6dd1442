//! Lenient parsing of the string-encoded numeric METAR fields
//!
//! A field that does not parse decodes as zero instead of failing the whole
//! report. The substitution is logged so bad upstream data stays visible.

use std::str::FromStr;
use tracing::{debug, warn};

use super::units::celsius_to_fahrenheit;

/// Parse `raw`, substituting the type's zero value on failure
pub(crate) fn parse_or_zero<T>(field: &'static str, raw: &str) -> T
where
    T: FromStr + Default,
{
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) if raw.is_empty() => {
            debug!(field, "Field is empty, using zero");
            T::default()
        }
        Err(_) => {
            warn!(field, input = raw, "Field is not numeric, using zero");
            T::default()
        }
    }
}

/// Altimeter in hundredths of inHg to inHg with two decimals
#[must_use]
pub fn altimeter_inhg(raw: &str) -> String {
    let hundredths: f64 = parse_or_zero("altimeter", raw);
    format!("{:.2}", hundredths / 100.0)
}

/// Temperature in degrees Celsius, reading a leading `M` as a minus sign
#[must_use]
pub fn celsius(field: &'static str, raw: &str) -> f64 {
    match raw.strip_prefix('M') {
        Some(magnitude) => parse_or_zero(field, &format!("-{magnitude}")),
        None => parse_or_zero(field, raw),
    }
}

/// Temperature formatted as `(celsius, fahrenheit)`, one decimal each
#[must_use]
pub fn temperature_pair(field: &'static str, raw: &str) -> (String, String) {
    let c = celsius(field, raw);
    (format!("{c:.1}"), format!("{:.1}", celsius_to_fahrenheit(c)))
}

/// Wind direction in whole degrees
#[must_use]
pub fn wind_degrees(raw: &str) -> i32 {
    parse_or_zero("wind_direction", raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3012", "30.12")]
    #[case("2992", "29.92")]
    #[case("0", "0.00")]
    #[case("", "0.00")]
    #[case("A3012", "0.00")]
    fn test_altimeter(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(altimeter_inhg(raw), expected);
    }

    #[rstest]
    #[case("M05", "-5.0", "23.0")]
    #[case("21", "21.0", "69.8")]
    #[case("00", "0.0", "32.0")]
    #[case("M40", "-40.0", "-40.0")]
    #[case("XX", "0.0", "32.0")]
    fn test_temperature_pair(#[case] raw: &str, #[case] c: &str, #[case] f: &str) {
        let (celsius, fahrenheit) = temperature_pair("temperature", raw);
        assert_eq!(celsius, c);
        assert_eq!(fahrenheit, f);
    }

    #[test]
    fn test_only_leading_m_is_a_sign() {
        assert_eq!(celsius("dewpoint", "M12"), -12.0);
        assert_eq!(celsius("dewpoint", "1M2"), 0.0);
    }

    #[rstest]
    #[case("250", 250)]
    #[case("000", 0)]
    #[case("VRB", 0)]
    #[case("", 0)]
    #[case("-10", -10)]
    fn test_wind_degrees(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(wind_degrees(raw), expected);
    }
}
