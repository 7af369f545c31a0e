//! Caching layer over a schedule store.
//!
//! Calendar rows and a date's exceptions change rarely (at most when the
//! feed is republished), so the two lookups at the head of every
//! resolution are worth caching. Trip and stop-time queries are keyed by
//! route, direction, and the resolved service set, so their cardinality
//! is much higher; they pass straight through to the inner store.

use std::sync::Arc;
use std::time::Duration;

use chrono::Weekday;
use moka::future::Cache as MokaCache;

use crate::domain::{
    AgencyId, CalendarExceptionRow, CalendarRow, DirectionId, RouteId, ServiceDate, ServiceFilter,
    StopId, StopTimeRow, TripId, TripRow,
};
use crate::storage::{ScheduleStorage, StorageError};

/// Cache key for a date's exceptions.
type ExceptionKey = (AgencyId, ServiceDate);

/// Configuration for the schedule cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// A schedule store wrapper that caches calendar and exception lookups.
pub struct CachedStorage<S> {
    inner: S,

    /// Exception rows, keyed by (agency, date).
    exceptions: MokaCache<ExceptionKey, Arc<Vec<CalendarExceptionRow>>>,

    /// All calendar rows of an agency.
    calendars: MokaCache<AgencyId, Arc<Vec<CalendarRow>>>,
}

impl<S: ScheduleStorage> CachedStorage<S> {
    /// Wrap a store with caches built from the given configuration.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let exceptions = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        let calendars = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            inner,
            exceptions,
            calendars,
        }
    }

    /// Access the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop all cached entries.
    pub async fn invalidate_all(&self) {
        self.exceptions.invalidate_all();
        self.calendars.invalidate_all();
    }
}

impl<S: ScheduleStorage + Send + Sync> ScheduleStorage for CachedStorage<S> {
    async fn calendar_exceptions(
        &self,
        agency: &AgencyId,
        date: ServiceDate,
    ) -> Result<Vec<CalendarExceptionRow>, StorageError> {
        let key = (agency.clone(), date);
        if let Some(hit) = self.exceptions.get(&key).await {
            return Ok((*hit).clone());
        }

        let rows = self.inner.calendar_exceptions(agency, date).await?;
        self.exceptions.insert(key, Arc::new(rows.clone())).await;
        Ok(rows)
    }

    async fn calendars(&self, agency: &AgencyId) -> Result<Vec<CalendarRow>, StorageError> {
        if let Some(hit) = self.calendars.get(agency).await {
            return Ok((*hit).clone());
        }

        let rows = self.inner.calendars(agency).await?;
        self.calendars
            .insert(agency.clone(), Arc::new(rows.clone()))
            .await;
        Ok(rows)
    }

    async fn active_calendars(
        &self,
        agency: &AgencyId,
        weekday: Weekday,
        date: ServiceDate,
    ) -> Result<Vec<CalendarRow>, StorageError> {
        // Derived from the cached full set rather than a second query
        // shape; the filter semantics are those of the trait contract.
        let rows = self.calendars(agency).await?;
        Ok(rows
            .into_iter()
            .filter(|row| row.runs_on(weekday) && row.in_window(date))
            .collect())
    }

    async fn trips(
        &self,
        agency: &AgencyId,
        route: &RouteId,
        direction: Option<DirectionId>,
        filter: &ServiceFilter,
    ) -> Result<Vec<TripRow>, StorageError> {
        self.inner.trips(agency, route, direction, filter).await
    }

    async fn stop_times_at_stop(
        &self,
        agency: &AgencyId,
        stop: &StopId,
        trips: &[TripId],
        limit: usize,
    ) -> Result<Vec<StopTimeRow>, StorageError> {
        self.inner.stop_times_at_stop(agency, stop, trips, limit).await
    }

    async fn stop_times_by_trip(
        &self,
        agency: &AgencyId,
        trip: &TripId,
    ) -> Result<Vec<StopTimeRow>, StorageError> {
        self.inner.stop_times_by_trip(agency, trip).await
    }
}
