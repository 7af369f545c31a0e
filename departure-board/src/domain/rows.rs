//! Schedule row records.
//!
//! These mirror the four upstream record kinds the resolver reads:
//! weekly calendars, date-specific calendar exceptions, trips, and stop
//! times. All rows are owned by the storage collaborator; the resolver
//! only ever reads them.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::date::ServiceDate;
use super::ids::{AgencyId, DirectionId, RouteId, ServiceId, StopId, TripId};
use super::time::DepartureTime;

/// One service identifier's recurring weekly schedule.
///
/// A boolean flag per weekday plus an inclusive `[start_date, end_date]`
/// validity window. At most one row exists per (agency, service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRow {
    pub agency: AgencyId,
    pub service: ServiceId,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub start_date: ServiceDate,
    pub end_date: ServiceDate,
}

impl CalendarRow {
    /// Returns true if this row's flag for the given weekday is set.
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Returns true if the date lies within the inclusive validity window.
    pub fn in_window(&self, date: ServiceDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Whether an exception adds or removes service on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionType {
    Added,
    Removed,
}

impl ExceptionType {
    /// Convert from the GTFS `exception_type` code (1 = added, 2 = removed).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Added),
            2 => Some(Self::Removed),
            _ => None,
        }
    }
}

/// A date-specific override of one service identifier's validity.
///
/// Unique per (service, date); multiple rows may exist per date across
/// different services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExceptionRow {
    pub agency: AgencyId,
    pub service: ServiceId,
    pub date: ServiceDate,
    pub exception_type: ExceptionType,
}

/// One scheduled vehicle journey and its service assignment.
///
/// A trip belongs to exactly one service identifier and runs on a date
/// iff that identifier is in the resolved active set for the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRow {
    pub agency: AgencyId,
    pub trip: TripId,
    pub route: RouteId,
    #[serde(default)]
    pub direction: Option<DirectionId>,
    pub service: ServiceId,
}

/// One scheduled call of a trip at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTimeRow {
    pub agency: AgencyId,
    pub trip: TripId,
    pub stop: StopId,
    pub stop_sequence: u32,
    pub departure_time: DepartureTime,
}
