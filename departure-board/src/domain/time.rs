//! Departure time handling.
//!
//! GTFS encodes times of day as `HH:MM:SS` measured from noon minus twelve
//! hours on the service day. The hour field may exceed 23: a trip that
//! starts before midnight and keeps running writes its post-midnight calls
//! as e.g. `25:10:00`, which must sort after every same-day time. Because
//! hours are zero-padded, lexicographic order on the strings agrees with
//! chronological order; this type compares numerically, which agrees with
//! both.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time: {reason}")]
pub struct InvalidDepartureTime {
    reason: &'static str,
}

impl InvalidDepartureTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day on the service day, possibly past midnight.
///
/// # Examples
///
/// ```
/// use departure_board::domain::DepartureTime;
///
/// let before = DepartureTime::parse("23:50:00").unwrap();
/// let after = DepartureTime::parse("25:10:00").unwrap();
///
/// // Post-midnight continuation sorts after the same-day time
/// assert!(before < after);
/// assert_eq!(after.to_string(), "25:10:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime {
    seconds: u32,
}

impl DepartureTime {
    /// Parse a time from the GTFS `HH:MM:SS` form.
    ///
    /// Hours may be a single digit (`8:00:00`) and may exceed 23 for
    /// post-midnight continuations. Minutes and seconds must be two
    /// digits below 60.
    pub fn parse(s: &str) -> Result<Self, InvalidDepartureTime> {
        let mut parts = s.split(':');
        let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), Some(sec), None) => (h, m, sec),
            _ => return Err(InvalidDepartureTime::new("expected HH:MM:SS")),
        };

        if hours.is_empty() || hours.len() > 3 || !hours.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidDepartureTime::new("invalid hour digits"));
        }
        let hours: u32 = hours.parse().map_err(|_| InvalidDepartureTime::new("invalid hour"))?;

        let minutes = parse_two_digits(minutes)
            .ok_or_else(|| InvalidDepartureTime::new("invalid minute digits"))?;
        if minutes > 59 {
            return Err(InvalidDepartureTime::new("minute must be 0-59"));
        }

        let seconds = parse_two_digits(seconds)
            .ok_or_else(|| InvalidDepartureTime::new("invalid second digits"))?;
        if seconds > 59 {
            return Err(InvalidDepartureTime::new("second must be 0-59"));
        }

        Ok(Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
        })
    }

    /// Total seconds since the start of the service day.
    pub fn total_seconds(&self) -> u32 {
        self.seconds
    }

    /// The hour field; 24 or greater for post-midnight continuations.
    pub fn hours(&self) -> u32 {
        self.seconds / 3600
    }

    /// The minute field (0-59).
    pub fn minutes(&self) -> u32 {
        (self.seconds / 60) % 60
    }

    /// Returns true if this time falls after midnight of the following day.
    pub fn is_post_midnight(&self) -> bool {
        self.hours() >= 24
    }
}

fn parse_two_digits(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({self})")
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds % 60
        )
    }
}

impl Serialize for DepartureTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DepartureTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = DepartureTime::parse("00:00:00").unwrap();
        assert_eq!(t.total_seconds(), 0);

        let t = DepartureTime::parse("08:30:15").unwrap();
        assert_eq!(t.hours(), 8);
        assert_eq!(t.minutes(), 30);
        assert_eq!(t.total_seconds(), 8 * 3600 + 30 * 60 + 15);

        // Single-digit hour is allowed
        let t = DepartureTime::parse("8:30:15").unwrap();
        assert_eq!(t.hours(), 8);
    }

    #[test]
    fn parse_post_midnight() {
        let t = DepartureTime::parse("25:10:00").unwrap();
        assert_eq!(t.hours(), 25);
        assert!(t.is_post_midnight());

        assert!(!DepartureTime::parse("23:59:59").unwrap().is_post_midnight());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(DepartureTime::parse("").is_err());
        assert!(DepartureTime::parse("0830").is_err());
        assert!(DepartureTime::parse("08:30").is_err());
        assert!(DepartureTime::parse("08:30:00:00").is_err());
        assert!(DepartureTime::parse("08-30-00").is_err());
        assert!(DepartureTime::parse("ab:cd:ef").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(DepartureTime::parse("08:60:00").is_err());
        assert!(DepartureTime::parse("08:00:60").is_err());
        // Minutes and seconds must be exactly two digits
        assert!(DepartureTime::parse("08:3:00").is_err());
        assert!(DepartureTime::parse("08:30:0").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(DepartureTime::parse("07:30:00").unwrap().to_string(), "07:30:00");
        assert_eq!(DepartureTime::parse("8:05:09").unwrap().to_string(), "08:05:09");
        assert_eq!(DepartureTime::parse("25:10:00").unwrap().to_string(), "25:10:00");
    }

    #[test]
    fn ordering() {
        let early = DepartureTime::parse("07:30:00").unwrap();
        let late = DepartureTime::parse("08:00:00").unwrap();
        let overnight = DepartureTime::parse("25:10:00").unwrap();

        assert!(early < late);
        assert!(late < overnight);
        assert!(DepartureTime::parse("23:50:00").unwrap() < overnight);
    }

    #[test]
    fn serde_as_string() {
        let t: DepartureTime = serde_json::from_str("\"25:10:00\"").unwrap();
        assert_eq!(t, DepartureTime::parse("25:10:00").unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"25:10:00\"");

        assert!(serde_json::from_str::<DepartureTime>("\"25:10\"").is_err());
    }
}
