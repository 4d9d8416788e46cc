//! Publication date validation

use crate::error::ParseError;
use chrono::{Datelike, NaiveDate};

/// Years accepted for a publication date
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=3000;

/// Parse a `DD/MM/YYYY` date that exists on the calendar
///
/// Exactly two day digits, two month digits and four year digits are required.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(input.to_string());

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(input, "%d/%m/%Y").map_err(|_| invalid())?;
    if !YEAR_RANGE.contains(&date.year()) {
        return Err(invalid());
    }
    Ok(date)
}

/// Whether the input is a valid `DD/MM/YYYY` date
pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}
