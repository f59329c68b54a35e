use serde::{self, Deserialize, Deserializer, Serializer};
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::error::Result;

/// The literal timestamp layout Xero parses in `If-Modified-Since` and in
/// date-valued query filters such as `CreatedDateUTC`.
const HEADER_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const FRACTIONAL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

const DATE_ONLY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a timestamp as UTC `yyyy-MM-ddTHH:mm:ss`, without fractional
/// seconds or a zone suffix.
pub fn format_date_header(datetime: OffsetDateTime) -> Result<String> {
    Ok(datetime.to_offset(UtcOffset::UTC).format(HEADER_FORMAT)?)
}

// Xero's XML dates are UTC, with or without a fractional part
// (e.g. "2014-04-05T17:35:20.94") and sometimes a trailing `Z`, or a bare date.
pub fn parse_xero_datetime(datetime_str: &str) -> std::result::Result<PrimitiveDateTime, String> {
    let trimmed = datetime_str.trim().trim_end_matches('Z');

    if trimmed.contains('.')
        && let Ok(dt) = PrimitiveDateTime::parse(trimmed, FRACTIONAL_FORMAT)
    {
        return Ok(dt);
    }

    if let Ok(dt) = PrimitiveDateTime::parse(trimmed, HEADER_FORMAT) {
        return Ok(dt);
    }

    time::Date::parse(trimmed, DATE_ONLY_FORMAT)
        .map(time::Date::midnight)
        .map_err(|e| format!("Failed to parse datetime '{datetime_str}': {e}"))
}

// Optional datetime serialization for XML elements
pub mod xero_datetime_format_option {
    use super::{
        Deserialize, Deserializer, HEADER_FORMAT, PrimitiveDateTime, Serializer,
        parse_xero_datetime, serde,
    };

    pub fn serialize<S>(datetime: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(dt) => {
                let formatted = dt
                    .format(HEADER_FORMAT)
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;

        match opt {
            Some(s) if !s.trim().is_empty() => parse_xero_datetime(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
