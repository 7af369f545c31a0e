//! Departure resolution for a stop.

use tracing::debug;

use crate::domain::{AgencyId, DepartureTime, DirectionId, RouteId, ServiceDate, StopId, StopTimeRow, TripId};
use crate::storage::ScheduleStorage;

use super::calendar::match_calendars;
use super::config::BoardConfig;
use super::error::ResolveError;
use super::exceptions::ExceptionIndex;
use super::service_set::resolve_service_set;

/// Request for the departures at one stop.
#[derive(Debug, Clone)]
pub struct DepartureRequest {
    /// The feed the stop belongs to.
    pub agency: AgencyId,

    /// The route departures are wanted for.
    pub route: RouteId,

    /// The stop departures are wanted at.
    pub stop: StopId,

    /// Optional direction narrowing; `None` matches both directions.
    pub direction: Option<DirectionId>,
}

impl DepartureRequest {
    /// Create a new request.
    pub fn new(
        agency: AgencyId,
        route: RouteId,
        stop: StopId,
        direction: Option<DirectionId>,
    ) -> Self {
        Self {
            agency,
            route,
            stop,
            direction,
        }
    }

    /// Validate the request.
    ///
    /// Runs before any storage query is issued.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.agency.is_empty() {
            return Err(ResolveError::MissingField { field: "agency" });
        }
        if self.stop.is_empty() {
            return Err(ResolveError::MissingField { field: "stop" });
        }
        if self.route.is_empty() {
            return Err(ResolveError::MissingField { field: "route" });
        }
        Ok(())
    }
}

/// Departure resolution over a schedule store.
pub struct DepartureBoard<'a, S: ScheduleStorage> {
    storage: &'a S,
    config: &'a BoardConfig,
}

impl<'a, S: ScheduleStorage> DepartureBoard<'a, S> {
    /// Create a new board over the given store.
    pub fn new(storage: &'a S, config: &'a BoardConfig) -> Self {
        Self { storage, config }
    }

    /// Resolve the ordered departures at a stop for the given date.
    ///
    /// Runs the full pipeline: request validation, exception and calendar
    /// lookup, service-set resolution, trip resolution, and stop-time
    /// projection. The result is ascending by departure time and capped
    /// at [`BoardConfig::max_departures`].
    pub async fn departures_for_stop(
        &self,
        request: &DepartureRequest,
        date: ServiceDate,
    ) -> Result<Vec<DepartureTime>, ResolveError> {
        request.validate()?;

        // The two lookups are independent of each other; only the trip
        // query needs their combined result.
        let (exceptions, outcome) = futures::join!(
            ExceptionIndex::load(self.storage, &request.agency, date),
            match_calendars(self.storage, &request.agency, date),
        );
        let exceptions = exceptions?;
        let filter = resolve_service_set(outcome?, exceptions);

        let trips = self
            .storage
            .trips(&request.agency, &request.route, request.direction, &filter)
            .await?;
        if trips.is_empty() {
            return Err(ResolveError::NoTrips);
        }
        debug!(
            route = %request.route,
            trips = trips.len(),
            "resolved running trips"
        );

        let trip_ids: Vec<TripId> = trips.into_iter().map(|trip| trip.trip).collect();
        let rows = self
            .storage
            .stop_times_at_stop(
                &request.agency,
                &request.stop,
                &trip_ids,
                self.config.max_departures,
            )
            .await?;
        if rows.is_empty() {
            return Err(ResolveError::NoStopTimes);
        }

        Ok(rows.into_iter().map(|row| row.departure_time).collect())
    }

    /// Resolve departures for the current date.
    ///
    /// Thin wrapper over [`departures_for_stop`](Self::departures_for_stop)
    /// with [`ServiceDate::today`].
    pub async fn departures_for_stop_today(
        &self,
        request: &DepartureRequest,
    ) -> Result<Vec<DepartureTime>, ResolveError> {
        self.departures_for_stop(request, ServiceDate::today()).await
    }

    /// All stop times of one trip, ordered by stop sequence.
    ///
    /// Pass-through to the store; no service-date resolution applies.
    pub async fn stop_times_for_trip(
        &self,
        agency: &AgencyId,
        trip: &TripId,
    ) -> Result<Vec<StopTimeRow>, ResolveError> {
        Ok(self.storage.stop_times_by_trip(agency, trip).await?)
    }
}
