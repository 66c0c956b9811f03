//! Error types for horoscope generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::date::DATE_FORMAT_HINT;

/// Errors surfaced to the caller. Everything past date parsing is total.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HoroError {
    /// Input is not a real calendar date in `DD.MM.YYYY` form.
    DateFormat(String),
}

impl Display for HoroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateFormat(input) => {
                write!(f, "invalid date {input:?}: expected {DATE_FORMAT_HINT}")
            }
        }
    }
}

impl Error for HoroError {}
