//! Service-date resolution pipeline.
//!
//! This module implements the core decision logic: turning calendar rows,
//! exception rows, and a reference date into the set of service
//! identifiers active on that date, and from there into an ordered list
//! of departure times at a stop.
//!
//! The pipeline runs as four dependent stages:
//!
//! 1. [`ExceptionIndex`] partitions the date's exceptions into added and
//!    removed service identifiers.
//! 2. [`match_calendars`] finds the services nominally active on the
//!    date's weekday, or reports that the agency carries no calendar.
//! 3. [`resolve_service_set`] combines the two under exception precedence
//!    (removal always wins) into a [`ServiceFilter`](crate::domain::ServiceFilter).
//! 4. [`DepartureBoard`] maps the filter through trips to an ordered,
//!    capped list of departures at the requested stop.

mod calendar;
mod config;
mod departures;
mod error;
mod exceptions;
mod service_set;

pub use calendar::{CalendarOutcome, match_calendars};
pub use config::BoardConfig;
pub use departures::{DepartureBoard, DepartureRequest};
pub use error::ResolveError;
pub use exceptions::ExceptionIndex;
pub use service_set::resolve_service_set;
