//! Parsing and formatting for the day-month-year date format that the
//! application uses everywhere a date crosses its boundary: CSV rows, JSON
//! payloads, URL query parameters and console input.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The zero-padded DD-MM-YYYY date format, e.g. `05-01-2024`.
pub const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]-[month]-[year]");

/// Parses `value` as a zero-padded DD-MM-YYYY date.
///
/// `field` names the input being parsed (e.g. `"date"`, `"start_date"`) so
/// that error messages can point the caller at the offending field.
///
/// # Errors
/// This function will return an [Error::InvalidDate] naming `field` and
/// echoing `value` if `value` is not a valid DD-MM-YYYY date.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, Error> {
    Date::parse(value, &DATE_FORMAT).map_err(|_| Error::InvalidDate {
        field,
        value: value.to_owned(),
    })
}

/// Formats `date` as a zero-padded DD-MM-YYYY string.
pub fn format_date(date: Date) -> String {
    date.format(&DATE_FORMAT)
        .expect("day-month-year formatting is infallible for a valid date")
}

/// Serializes and deserializes [Date] fields as DD-MM-YYYY strings.
///
/// For use with `#[serde(with = "crate::date::serde_format")]`.
pub mod serde_format {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::Date;

    use super::{DATE_FORMAT, format_date};

    /// Serializes `date` as a DD-MM-YYYY string.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    /// Deserializes a DD-MM-YYYY string into a [Date].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, &DATE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod date_tests {
    use time::macros::date;

    use crate::{
        Error,
        date::{format_date, parse_date},
    };

    #[test]
    fn parse_date_accepts_zero_padded_dates() {
        assert_eq!(parse_date("date", "05-01-2024"), Ok(date!(2024 - 01 - 05)));
        assert_eq!(parse_date("date", "31-12-2023"), Ok(date!(2023 - 12 - 31)));
    }

    #[test]
    fn parse_date_rejects_iso_dates() {
        let result = parse_date("start_date", "2024-01-01");

        assert_eq!(
            result,
            Err(Error::InvalidDate {
                field: "start_date",
                value: "2024-01-01".to_owned()
            })
        );
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(parse_date("date", "32-01-2024").is_err());
        assert!(parse_date("date", "29-02-2023").is_err());
        assert!(parse_date("date", "not a date").is_err());
    }

    #[test]
    fn parse_date_error_names_the_field() {
        let error = parse_date("end_date", "banana").expect_err("expected an error");

        let message = error.to_string();
        assert!(
            message.contains("end_date") && message.contains("banana"),
            "error message should name the field and echo the input, got: {message}"
        );
    }

    #[test]
    fn format_date_zero_pads() {
        assert_eq!(format_date(date!(2024 - 01 - 05)), "05-01-2024");
        assert_eq!(format_date(date!(2023 - 12 - 31)), "31-12-2023");
    }
}
