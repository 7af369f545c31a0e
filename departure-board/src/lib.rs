//! Stop departure resolution for GTFS static schedules.
//!
//! Answers the question: "which scheduled departures apply at this stop,
//! on this route and direction, for this date?" The answer requires
//! reconciling three data sources with independent validity rules: the
//! weekly recurring calendar, date-specific service exceptions, and the
//! trip-to-service assignments that determine which trips run.
//!
//! Schedule records live behind the [`storage::ScheduleStorage`] trait;
//! the resolution pipeline in [`resolver`] only ever reads them.

pub mod cache;
pub mod domain;
pub mod resolver;
pub mod storage;
