//! Service day handling.
//!
//! GTFS encodes dates as `YYYYMMDD` strings, chosen so that string
//! comparison agrees with date comparison. [`ServiceDate`] parses that
//! form into a real calendar date and renders it back on demand.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid `YYYYMMDD` date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service date: {reason}")]
pub struct InvalidServiceDate {
    reason: &'static str,
}

impl InvalidServiceDate {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A single service day, the date for which active service is resolved.
///
/// # Examples
///
/// ```
/// use departure_board::domain::ServiceDate;
///
/// let date = ServiceDate::parse("20240101").unwrap();
/// assert_eq!(date.to_string(), "20240101");
/// assert_eq!(date.weekday(), chrono::Weekday::Mon);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceDate(NaiveDate);

impl ServiceDate {
    /// Create a service date from a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a date from the GTFS `YYYYMMDD` form.
    pub fn parse(s: &str) -> Result<Self, InvalidServiceDate> {
        if s.len() != 8 {
            return Err(InvalidServiceDate::new("expected YYYYMMDD"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidServiceDate::new("expected only digits"));
        }
        let date = NaiveDate::parse_from_str(s, "%Y%m%d")
            .map_err(|_| InvalidServiceDate::new("no such calendar date"))?;
        Ok(Self(date))
    }

    /// The current date in the process-local timezone.
    ///
    /// Convenience for callers that want "today's board"; resolution
    /// itself always takes the date explicitly.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}

impl From<NaiveDate> for ServiceDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Debug for ServiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceDate({self})")
    }
}

impl fmt::Display for ServiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for ServiceDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_date()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28  // Safe for all months
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
    }

    proptest! {
        /// Display then parse roundtrips
        #[test]
        fn display_parse_roundtrip(date in valid_date()) {
            let d = ServiceDate::new(date);
            let parsed = ServiceDate::parse(&d.to_string()).unwrap();
            prop_assert_eq!(parsed, d);
        }

        /// Ordering on ServiceDate agrees with lexicographic ordering of
        /// the YYYYMMDD form
        #[test]
        fn ordering_agrees_with_strings(a in valid_date(), b in valid_date()) {
            let (da, db) = (ServiceDate::new(a), ServiceDate::new(b));
            prop_assert_eq!(da.cmp(&db), da.to_string().cmp(&db.to_string()));
        }

        /// Weekday agrees with chrono
        #[test]
        fn weekday_agrees_with_chrono(date in valid_date()) {
            use chrono::Datelike;
            prop_assert_eq!(ServiceDate::new(date).weekday(), date.weekday());
        }
    }
}
