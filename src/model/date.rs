//! Conversions for OFX date and date-time values.
//!
//! OFX writes dates as `YYYYMMDD` optionally followed by `HHMMSS`, fractional seconds and a
//! bracketed timezone, e.g. `20240115120000.000[-5:EST]`. Only the calendar date (and for the
//! generation timestamp, the wall-clock time) is kept.

use crate::error::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_LEN: usize = 8;
const DATE_TIME_LEN: usize = 14;

/// Parses the `YYYYMMDD` prefix of `text`, ignoring anything after it.
pub(crate) fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    if text.len() < DATE_LEN {
        return Err(ParseError::DateTooShort {
            text: text.to_string(),
        });
    }
    NaiveDate::parse_from_str(prefix(text, DATE_LEN), "%Y%m%d").map_err(|source| {
        ParseError::InvalidDate {
            text: text.to_string(),
            source,
        }
    })
}

/// Parses the `YYYYMMDDHHMMSS` prefix of `text`. When the time part is missing or unreadable the
/// date alone is used, at midnight.
pub(crate) fn parse_date_time(text: &str) -> Result<NaiveDateTime, ParseError> {
    if text.len() >= DATE_TIME_LEN {
        if let Ok(dt) = NaiveDateTime::parse_from_str(prefix(text, DATE_TIME_LEN), "%Y%m%d%H%M%S")
        {
            return Ok(dt);
        }
    }
    Ok(parse_date(text)?.and_time(NaiveTime::MIN))
}

/// The first `len` bytes of `text`, extended to the next char boundary. A prefix that had to be
/// extended holds a non-ASCII character and fails to parse downstream.
fn prefix(text: &str, len: usize) -> &str {
    let end = (len..=text.len())
        .find(|&ix| text.is_char_boundary(ix))
        .unwrap_or(text.len());
    &text[..end]
}
