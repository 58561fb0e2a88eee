//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValueObjectError;

/// Formats accepted from `datetime-local` controls, tried in order.
const LOCAL_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Format of `date` controls. Read as midnight.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset form without seconds, which RFC 3339 does not cover.
const OFFSET_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Hall identifier value object.
///
/// The page renders it as an opaque string; it is passed through to the
/// availability endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HallId(String);

impl HallId {
    /// Create a new HallId.
    ///
    /// # Arguments
    ///
    /// * `id` - The hall identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the HallId or an error if validation fails
    pub fn new(id: impl Into<String>) -> Result<Self, ValueObjectError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValueObjectError::HallIdEmpty);
        }
        Ok(Self(id.trim().to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A date-time picked on the booking form.
///
/// The submitted text is kept as entered and is what the server receives.
/// Values without an offset are wall-clock times in the visitor's zone; a
/// value with an offset keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingDateTime {
    submitted: String,
    wall: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl BookingDateTime {
    /// Parse a raw control value.
    ///
    /// Accepts `datetime-local` values, `date` values (midnight) and
    /// ISO 8601 values carrying an offset.
    ///
    /// # Errors
    ///
    /// * `DateTimeEmpty` if the value is blank
    /// * `DateTimeInvalid` if no accepted format matches
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValueObjectError::DateTimeEmpty);
        }
        let (wall, offset) = parse_wall_clock(raw)
            .ok_or_else(|| ValueObjectError::DateTimeInvalid(raw.to_string()))?;

        Ok(Self {
            submitted: raw.to_string(),
            wall,
            offset,
        })
    }

    /// The value exactly as it was entered (trimmed).
    pub fn as_submitted(&self) -> &str {
        &self.submitted
    }

    /// Shift by whole hours, keeping the offset. `None` on calendar overflow.
    pub fn plus_hours(&self, hours: i64) -> Option<Self> {
        let wall = self
            .wall
            .checked_add_signed(TimeDelta::try_hours(hours)?)?;
        let submitted = render(wall, self.offset);
        Some(Self {
            submitted,
            wall,
            offset: self.offset,
        })
    }

    /// Render in the shape a `datetime-local` control accepts, followed by
    /// the offset when there is one.
    ///
    /// Seconds are only written when non-zero.
    pub fn to_form_value(&self) -> String {
        render(self.wall, self.offset)
    }

    /// Time from `self` until `later`.
    ///
    /// Two values without an offset are compared as wall-clock times. When
    /// either carries an offset, a value without one is read in the local
    /// zone.
    pub fn until(&self, later: &Self) -> TimeDelta {
        match (self.offset, later.offset) {
            (None, None) => later.wall - self.wall,
            _ => later.instant() - self.instant(),
        }
    }

    /// The UTC instant this value denotes.
    fn instant(&self) -> NaiveDateTime {
        let instant = match self.offset {
            Some(offset) => offset
                .from_local_datetime(&self.wall)
                .single()
                .map(|value| value.naive_utc()),
            None => Local
                .from_local_datetime(&self.wall)
                .earliest()
                .map(|value| value.naive_utc()),
        };
        instant.unwrap_or(self.wall)
    }
}

fn parse_wall_clock(raw: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    for format in LOCAL_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Some((value, None));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0).map(|value| (value, None));
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, OFFSET_MINUTES_FORMAT))
        .ok()
        .map(|value| (value.naive_local(), Some(*value.offset())))
}

fn render(wall: NaiveDateTime, offset: Option<FixedOffset>) -> String {
    let format = if wall.nanosecond() != 0 {
        "%Y-%m-%dT%H:%M:%S%.f"
    } else if wall.second() != 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M"
    };
    let mut value = wall.format(format).to_string();
    if let Some(offset) = offset {
        value.push_str(&offset.to_string());
    }
    value
}

impl FromStr for BookingDateTime {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BookingDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_form_value())
    }
}

/// Booking time range. Always satisfies `end > start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    start: BookingDateTime,
    end: BookingDateTime,
}

impl TimeRange {
    /// # Errors
    ///
    /// Returns `ValueObjectError::InvalidRange` when `end <= start`
    pub fn new(start: BookingDateTime, end: BookingDateTime) -> Result<Self, ValueObjectError> {
        if start.until(&end) <= TimeDelta::zero() {
            return Err(ValueObjectError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &BookingDateTime {
        &self.start
    }

    pub fn end(&self) -> &BookingDateTime {
        &self.end
    }

    /// Length of the range in milliseconds (always positive).
    pub fn duration_millis(&self) -> i64 {
        self.start.until(&self.end).num_milliseconds()
    }
}

/// Price per hour supplied by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourlyRate(Decimal);

impl HourlyRate {
    /// # Errors
    ///
    /// Returns `ValueObjectError::NegativeRate` for values below zero
    pub fn new(value: Decimal) -> Result<Self, ValueObjectError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValueObjectError::NegativeRate);
        }
        Ok(Self(value))
    }

    /// Parse a raw control value such as `"100.00"`.
    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        let raw = raw.trim();
        let value =
            Decimal::from_str(raw).map_err(|_| ValueObjectError::RateInvalid(raw.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Number of people expected at the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AttendeeCount(u32);

impl AttendeeCount {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        parse_count(raw).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Maximum number of attendees a hall holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HallCapacity(u32);

impl HallCapacity {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn parse(raw: &str) -> Result<Self, ValueObjectError> {
        parse_count(raw).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn admits(&self, attendees: AttendeeCount) -> bool {
        attendees.0 <= self.0
    }
}

fn parse_count(raw: &str) -> Result<u32, ValueObjectError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map_err(|_| ValueObjectError::CountInvalid(raw.to_string()))
}

/// Notice identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(Uuid);

impl NoticeId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `self` until `now`.
    pub fn elapsed_until(&self, now: Timestamp) -> i64 {
        now.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
