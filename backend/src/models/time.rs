//! Birth time normalization.
//!
//! Turns the civil birth date/time strings and a raw UTC offset into the
//! continuous Julian Day count the ephemeris works with. Everything here is
//! pure: no I/O, no global state.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Accepted `birth_date` layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted `birth_time` layout.
pub const TIME_FORMAT: &str = "%H:%M";

/// Clock time substituted when the birth time is unknown (local noon).
pub const UNKNOWN_TIME_DEFAULT: (u32, u32) = (12, 0);

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Julian Day in Universal Time, Gregorian calendar convention.
/// JD 2451545.0 = 2000-01-01 12:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// The J2000.0 epoch.
    pub const J2000: JulianDay = JulianDay(2_451_545.0);

    /// Days per Julian century.
    pub const DAYS_PER_CENTURY: f64 = 36_525.0;

    /// Create a new Julian Day value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw day count as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.0 - Self::J2000.0) / Self::DAYS_PER_CENTURY
    }

    /// Shift by a number of seconds (used for UT -> TT corrections).
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self(self.0 + seconds / 86_400.0)
    }

    /// Build from a proleptic Gregorian calendar date and decimal hour.
    ///
    /// This is the classic Julian Day algorithm: January and February are
    /// counted as months 13 and 14 of the previous year, and the Gregorian
    /// century correction is always applied.
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: f64) -> Self {
        let (mut y, mut m) = (f64::from(year), f64::from(month));
        if month <= 2 {
            y -= 1.0;
            m += 12.0;
        }
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        Self(
            (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
                + f64::from(day)
                + b
                - 1524.5
                + hour / 24.0,
        )
    }

    /// Build from a UTC instant. Sub-second precision is dropped.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let hour = f64::from(dt.hour())
            + f64::from(dt.minute()) / 60.0
            + f64::from(dt.second()) / SECONDS_PER_HOUR;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), hour)
    }

    /// Split back into `(year, month, day, decimal hour)` on the Gregorian calendar.
    pub fn to_calendar(&self) -> (i32, u32, u32, f64) {
        let jd = self.0 + 0.5;
        let z = jd.floor();
        let f = jd - z;
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        (year as i32, month as u32, day as u32, f * 24.0)
    }

    /// Convert to a UTC instant, rounded to the nearest second.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let (year, month, day, hour) = self.to_calendar();
        let midnight = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?;
        let seconds = (hour * SECONDS_PER_HOUR).round() as i64;
        Some(Utc.from_utc_datetime(&(midnight + Duration::seconds(seconds))))
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_birth_date(birth_date: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(birth_date.trim(), DATE_FORMAT)
        .map_err(|_| ChartError::InvalidDateFormat(birth_date.to_string()))
}

/// Parse an `HH:MM` birth time. Absent or blank input means "unknown" and
/// yields local noon.
pub fn parse_birth_time(birth_time: Option<&str>) -> Result<NaiveTime, ChartError> {
    match birth_time.map(str::trim) {
        Some(raw) if !raw.is_empty() => NaiveTime::parse_from_str(raw, TIME_FORMAT)
            .map_err(|_| ChartError::InvalidTimeFormat(raw.to_string())),
        _ => {
            let (hour, minute) = UNKNOWN_TIME_DEFAULT;
            NaiveTime::from_hms_opt(hour, minute, 0)
                .ok_or_else(|| ChartError::InvalidTimeFormat(format!("{hour:02}:{minute:02}")))
        }
    }
}

/// Build a fixed UTC offset from signed, possibly fractional hours.
pub fn fixed_offset(tz_offset_hours: f64) -> Result<FixedOffset, ChartError> {
    if !tz_offset_hours.is_finite() || tz_offset_hours.abs() >= 24.0 {
        return Err(ChartError::InvalidTimezoneOffset(tz_offset_hours));
    }
    let seconds = (tz_offset_hours * SECONDS_PER_HOUR).round() as i32;
    FixedOffset::east_opt(seconds).ok_or(ChartError::InvalidTimezoneOffset(tz_offset_hours))
}

/// A local wall-clock birth time tagged with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInstant {
    local: DateTime<FixedOffset>,
}

impl NormalizedInstant {
    /// Parse the request strings into a local instant.
    pub fn parse(
        birth_date: &str,
        birth_time: Option<&str>,
        tz_offset_hours: f64,
    ) -> Result<Self, ChartError> {
        let date = parse_birth_date(birth_date)?;
        let time = parse_birth_time(birth_time)?;
        let offset = fixed_offset(tz_offset_hours)?;

        let local = date
            .and_time(time)
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| ChartError::InvalidDateFormat(birth_date.to_string()))?;

        Ok(Self { local })
    }

    /// Wall-clock time at the birth place.
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.local
    }

    /// The absolute instant (local time minus the offset).
    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }

    /// Julian Day of the UTC instant.
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_datetime(self.utc())
    }
}

/// Normalize civil birth data into the astronomical time the ephemeris expects.
pub fn normalize(
    birth_date: &str,
    birth_time: Option<&str>,
    tz_offset_hours: f64,
) -> Result<JulianDay, ChartError> {
    NormalizedInstant::parse(birth_date, birth_time, tz_offset_hours).map(|i| i.julian_day())
}
