//! Time handling for forecast horizons
//!
//! The model works in plain unix time: upstream samples arrive stamped to
//! the second, and the solar-position algorithm consumes the raw
//! timestamp directly, so no calendar library is needed.

/// Timestamp in seconds since the unix epoch, UTC.
pub type Timestamp = u64;

/// Seconds per hour.
pub const SECS_PER_HOUR: u64 = 3600;

/// Seconds per day.
pub const SECS_PER_DAY: u64 = 86_400;

/// Advance a timestamp by a whole number of hours.
pub const fn hours_ahead(ts: Timestamp, hours: u64) -> Timestamp {
    ts + hours * SECS_PER_HOUR
}

/// Seconds elapsed since the preceding UTC midnight.
pub const fn seconds_of_day(ts: Timestamp) -> u64 {
    ts % SECS_PER_DAY
}
