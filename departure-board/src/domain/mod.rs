//! Domain types for schedule data.
//!
//! This module contains the types that represent GTFS-style schedule
//! records and the identifiers that tie them together. Parsing types
//! ([`ServiceDate`], [`DepartureTime`]) enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod date;
mod filter;
mod ids;
mod rows;
mod time;

pub use date::{InvalidServiceDate, ServiceDate};
pub use filter::ServiceFilter;
pub use ids::{AgencyId, DirectionId, RouteId, ServiceId, StopId, TripId};
pub use rows::{CalendarExceptionRow, CalendarRow, ExceptionType, StopTimeRow, TripRow};
pub use time::{DepartureTime, InvalidDepartureTime};
