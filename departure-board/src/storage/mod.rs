//! Storage collaborator seam.
//!
//! All schedule records are owned by an upstream store; the resolver
//! consumes it through the read-only [`ScheduleStorage`] trait. Filtering,
//! ordering, and result-count limiting are the store's responsibility, so
//! a backend can push them down to its query engine. [`MemoryStorage`]
//! is the bundled implementation, serving records from memory (and JSON
//! fixtures) as if they were a live store.

mod error;
mod memory;

pub use error::StorageError;
pub use memory::{Feed, MemoryStorage};

use chrono::Weekday;

use crate::domain::{
    AgencyId, CalendarExceptionRow, CalendarRow, DirectionId, RouteId, ServiceDate, ServiceFilter,
    StopId, StopTimeRow, TripId, TripRow,
};

/// Read-only query capabilities over a schedule store.
///
/// Every method is a parameterized lookup with no side effects; a request
/// may be abandoned at any point with nothing to undo. Implementations
/// that can time out should report it as [`StorageError::Timeout`] so the
/// caller can tell it apart from a failed lookup.
#[allow(async_fn_in_trait)]
pub trait ScheduleStorage {
    /// All calendar exception rows for the agency on the given date.
    ///
    /// An empty result means no exceptions apply, which is not an error.
    async fn calendar_exceptions(
        &self,
        agency: &AgencyId,
        date: ServiceDate,
    ) -> Result<Vec<CalendarExceptionRow>, StorageError>;

    /// All calendar rows for the agency, regardless of date.
    async fn calendars(&self, agency: &AgencyId) -> Result<Vec<CalendarRow>, StorageError>;

    /// Calendar rows whose flag for `weekday` is set and whose inclusive
    /// validity window contains `date`.
    async fn active_calendars(
        &self,
        agency: &AgencyId,
        weekday: Weekday,
        date: ServiceDate,
    ) -> Result<Vec<CalendarRow>, StorageError>;

    /// Trips on the route passing the service filter, optionally narrowed
    /// to one direction.
    async fn trips(
        &self,
        agency: &AgencyId,
        route: &RouteId,
        direction: Option<DirectionId>,
        filter: &ServiceFilter,
    ) -> Result<Vec<TripRow>, StorageError>;

    /// Stop times at the stop for any of the given trips, ordered
    /// ascending by departure time and truncated to `limit` rows.
    async fn stop_times_at_stop(
        &self,
        agency: &AgencyId,
        stop: &StopId,
        trips: &[TripId],
        limit: usize,
    ) -> Result<Vec<StopTimeRow>, StorageError>;

    /// All stop times of one trip, ordered by stop sequence.
    async fn stop_times_by_trip(
        &self,
        agency: &AgencyId,
        trip: &TripId,
    ) -> Result<Vec<StopTimeRow>, StorageError>;
}
