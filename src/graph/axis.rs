//! Human-readable axis tick labels.

use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use regex::Regex;

use crate::dataset::parser::parse_number;
use crate::dataset::CellValue;

/// Plain signed decimals, dot or comma separator. Narrower than the
/// parser's numeric rule: exponent notation falls through to pass-through.
static PLAIN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+([,.][0-9]+)?$").expect("decimal pattern compiles"));

/// Formats a cell value for axis display.
///
/// A value on a timestamp axis whose decimal form is exactly 10
/// characters and names a valid unix-seconds instant renders as
/// `M/D/YYYY h:mm:ss AM/PM` (12-hour clock, no leading zeros, UTC).
/// Plain decimals render with exactly four fractional digits. Everything
/// else passes through unchanged. Total over all inputs; never fails.
pub fn format_axis_value(value: &CellValue, is_timestamp: bool) -> String {
    let value_string = value.to_string();

    if is_timestamp && value_string.len() == 10 {
        if let Some(formatted) = format_unix_seconds(&value_string) {
            return formatted;
        }
    }

    if PLAIN_DECIMAL.is_match(&value_string) {
        if let Some(number) = parse_number(&value_string) {
            return format!("{:.4}", number);
        }
    }

    value_string
}

/// Renders a 10-character unix-seconds string, if it is one.
fn format_unix_seconds(value_string: &str) -> Option<String> {
    let seconds: i64 = value_string.parse().ok()?;
    let instant = Utc.timestamp_opt(seconds, 0).single()?;
    Some(
        instant
            .format("%-m/%-d/%Y %-I:%M:%S %p")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digit_timestamp_renders_as_calendar_date() {
        let out = format_axis_value(&CellValue::Time(1700000000), true);
        assert_eq!(out, "11/14/2023 10:13:20 PM");
    }

    #[test]
    fn test_no_leading_zeros_in_date_parts() {
        // 2021-02-03T04:05:06Z
        let out = format_axis_value(&CellValue::Time(1612325106), true);
        assert_eq!(out, "2/3/2021 4:05:06 AM");
    }

    #[test]
    fn test_short_value_on_timestamp_axis_formats_as_decimal() {
        let out = format_axis_value(&CellValue::Number(5.0), true);
        assert_eq!(out, "5.0000");
    }

    #[test]
    fn test_plain_number_gets_four_decimals() {
        assert_eq!(
            format_axis_value(&CellValue::Number(3.14159), false),
            "3.1416"
        );
        assert_eq!(format_axis_value(&CellValue::Number(-2.0), false), "-2.0000");
    }

    #[test]
    fn test_decimal_comma_string_is_numeric() {
        assert_eq!(
            format_axis_value(&CellValue::Text("1,5".into()), false),
            "1.5000"
        );
    }

    #[test]
    fn test_category_label_passes_through() {
        assert_eq!(format_axis_value(&CellValue::Text("red".into()), false), "red");
    }

    #[test]
    fn test_exponent_notation_passes_through() {
        // The parser accepts exponents; the axis rule deliberately
        // does not.
        assert_eq!(
            format_axis_value(&CellValue::Text("2e+3".into()), false),
            "2e+3"
        );
    }

    #[test]
    fn test_non_numeric_ten_char_string_is_untouched() {
        let out = format_axis_value(&CellValue::Text("aaaaaaaaaa".into()), true);
        assert_eq!(out, "aaaaaaaaaa");
    }
}
