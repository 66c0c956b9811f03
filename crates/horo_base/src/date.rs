//! `DD.MM.YYYY` parsing and formatting.

use chrono::NaiveDate;

use crate::error::HoroError;

/// chrono format string for the only accepted date layout.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Human-readable form of [`DATE_FORMAT`].
pub const DATE_FORMAT_HINT: &str = "DD.MM.YYYY";

/// Parse a birth date. Surrounding whitespace is ignored.
///
/// Impossible dates such as `31.13.2020` or `29.02.2023` are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate, HoroError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| HoroError::DateFormat(trimmed.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
