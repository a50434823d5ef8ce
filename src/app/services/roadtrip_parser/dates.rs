//! Road Trip date parsing
//!
//! The app writes dates in two layouts: fuel and maintenance records carry a
//! time of day (`2024-12-09 15:04`), tire and valuation records do not
//! (`2024-12-09`). Month and day may be unpadded. Parsing tries the longer
//! layout first and falls back to the date-only layout at midnight.

use crate::constants::{DATE_FORMAT, DATE_TIME_FORMAT};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a Road Trip date string, returning `None` when neither layout matches
///
/// Whether an unparseable date matters is the caller's decision.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a Road Trip date string, reporting `DateUnparseable` on failure
pub fn parse_date_strict(value: &str) -> Result<NaiveDateTime> {
    parse_date(value).ok_or_else(|| Error::date_unparseable(value))
}
