//! # OFX Date-Times
//!
//! OFX writes instants as `YYYYMMDD[HHMMSS[.XXX]][[gmt offset[:tz name]]]`,
//! for example `20240115`, `20240115093000.000` or
//! `20240115093000.000[-5:EST]`. [`OfxDateTime`] parses every accepted form
//! and normalizes it to UTC, keeping millisecond precision.
//!
//! A value with no bracketed offset is read as UTC. The offset hours may
//! carry a sign and a `.MM` minutes part (`[+5.30:IST]`); the zone name is
//! informational and ignored.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OfxError;

/// A UTC instant read from an OFX date-time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OfxDateTime(DateTime<Utc>);

impl OfxDateTime {
    /// Wrap a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse an OFX date-time string.
    ///
    /// # Errors
    ///
    /// Returns `OfxError::DateTime` if the string does not follow the OFX
    /// layout or names an impossible date, time or offset.
    pub fn parse(s: &str) -> Result<Self, OfxError> {
        let fail = |reason: &str| OfxError::DateTime {
            raw: s.to_string(),
            reason: reason.to_string(),
        };

        let (body, zone) = match s.find('[') {
            Some(open) => {
                let zone = s[open + 1..]
                    .strip_suffix(']')
                    .ok_or_else(|| fail("unterminated time zone bracket"))?;
                (&s[..open], Some(zone))
            }
            None => (s, None),
        };

        let (digits, millis) = match body.split_once('.') {
            Some((digits, frac)) => (digits, Some(frac)),
            None => (body, None),
        };
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail("expected digits"));
        }

        let field = |range: std::ops::Range<usize>| -> u32 {
            digits[range].parse().unwrap_or(u32::MAX)
        };
        let (hour, minute, second) = match digits.len() {
            8 => (0, 0, 0),
            12 => (field(8..10), field(10..12), 0),
            14 => (field(8..10), field(10..12), field(12..14)),
            _ => return Err(fail("expected YYYYMMDD, YYYYMMDDHHMM or YYYYMMDDHHMMSS")),
        };
        let milli = match millis {
            None => 0,
            Some(frac) if digits.len() == 14 && frac.len() == 3 => frac
                .parse::<u32>()
                .map_err(|_| fail("milliseconds must be three digits"))?,
            Some(_) => return Err(fail("milliseconds must be three digits after seconds")),
        };

        let year = digits[0..4].parse::<i32>().map_err(|_| fail("bad year"))?;
        let naive = NaiveDate::from_ymd_opt(year, field(4..6), field(6..8))
            .and_then(|d| d.and_hms_milli_opt(hour, minute, second, milli))
            .ok_or_else(|| fail("date or time out of range"))?;

        let offset_secs = match zone {
            Some(zone) => parse_gmt_offset(zone).ok_or_else(|| fail("bad GMT offset"))?,
            None => 0,
        };
        let offset = FixedOffset::east_opt(offset_secs).ok_or_else(|| fail("GMT offset out of range"))?;
        let local = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| fail("ambiguous local time"))?;

        Ok(Self(local.with_timezone(&Utc)))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render in OFX form, always with milliseconds and an explicit GMT zone
    /// (e.g. `20240115143000.000[0:GMT]`). [`OfxDateTime::parse`] reads the
    /// output back to the same instant.
    pub fn to_ofx(&self) -> String {
        self.0.format("%Y%m%d%H%M%S%.3f[0:GMT]").to_string()
    }
}

impl std::fmt::Display for OfxDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ofx())
    }
}

/// Parse the inside of an OFX zone bracket (`-5:EST`, `+5.30`, `0:GMT`) into
/// seconds east of UTC.
fn parse_gmt_offset(zone: &str) -> Option<i32> {
    let offset = zone.split(':').next().unwrap_or(zone);
    let (negative, unsigned) = match offset.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, offset.strip_prefix('+').unwrap_or(offset)),
    };
    let (hours, minutes) = match unsigned.split_once('.') {
        Some((h, m)) => (h, m),
        None => (unsigned, "0"),
    };
    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let secs = hours.checked_mul(3600)?.checked_add(minutes * 60)?;
    Some(if negative { -secs } else { secs })
}
