use std::ops::Index;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serializer;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Accepts RFC 3339 (`2024-03-31T10:00:00+02:00`) or the plain
/// `2024-03-31 10:00:00[.000]` form, the latter read as UTC.
pub fn parse_timestamp(buf: &str) -> Result<DateTime<FixedOffset>, String> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf.trim()) {
        return Ok(date_time);
    }

    lazy_static! {
        static ref DATE_TIME_REGEX : Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2}) (\d{1,2}):(\d{1,2}):(\d{1,2})(\.\d{0,3})?$"
        ).unwrap();
    }

    let Some(caps) = DATE_TIME_REGEX.captures(buf.trim()) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = to_u32(caps.index(4))?;
    let mn: u32 = to_u32(caps.index(5))?;
    let s: u32 = to_u32(caps.index(6))?;

    let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| format!("Invalid date in {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s).ok_or_else(|| format!("Invalid time in {}", buf))?;

    let date_time = NaiveDateTime::new(date, time).and_utc();
    Ok(date_time.fixed_offset())
}

/// ISO-8601 in UTC with milliseconds, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_timestamp(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_timestamp<S>(date_time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    serializer.serialize_str(&format_timestamp(date_time))
}
