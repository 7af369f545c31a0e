//! In-memory schedule storage.
//!
//! Serves schedule rows from plain vectors as if they were a live store.
//! This is useful for development and testing without a real backend;
//! fixtures can be loaded from a JSON feed file.

use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AgencyId, CalendarExceptionRow, CalendarRow, DirectionId, RouteId, ServiceDate, ServiceFilter,
    StopId, StopTimeRow, TripId, TripRow,
};

use super::ScheduleStorage;
use super::error::StorageError;

/// A complete schedule feed in JSON form.
///
/// Section names follow the GTFS file names. Every section is optional;
/// a missing section is an empty one.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub calendar: Vec<CalendarRow>,
    #[serde(default)]
    pub calendar_dates: Vec<CalendarExceptionRow>,
    #[serde(default)]
    pub trips: Vec<TripRow>,
    #[serde(default)]
    pub stop_times: Vec<StopTimeRow>,
}

/// Schedule storage backed by in-memory vectors.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    calendars: Vec<CalendarRow>,
    exceptions: Vec<CalendarExceptionRow>,
    trips: Vec<TripRow>,
    stop_times: Vec<StopTimeRow>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a parsed feed.
    pub fn from_feed(feed: Feed) -> Self {
        Self {
            calendars: feed.calendar,
            exceptions: feed.calendar_dates,
            trips: feed.trips,
            stop_times: feed.stop_times,
        }
    }

    /// Load a store from a JSON feed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse a store from a JSON feed string.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let feed: Feed = serde_json::from_str(json).map_err(|e| StorageError::Decode {
            message: e.to_string(),
        })?;
        Ok(Self::from_feed(feed))
    }

    /// Add a calendar row.
    pub fn add_calendar(&mut self, row: CalendarRow) {
        self.calendars.push(row);
    }

    /// Add a calendar exception row.
    pub fn add_exception(&mut self, row: CalendarExceptionRow) {
        self.exceptions.push(row);
    }

    /// Add a trip row.
    pub fn add_trip(&mut self, row: TripRow) {
        self.trips.push(row);
    }

    /// Add a stop time row.
    pub fn add_stop_time(&mut self, row: StopTimeRow) {
        self.stop_times.push(row);
    }
}

impl ScheduleStorage for MemoryStorage {
    async fn calendar_exceptions(
        &self,
        agency: &AgencyId,
        date: ServiceDate,
    ) -> Result<Vec<CalendarExceptionRow>, StorageError> {
        Ok(self
            .exceptions
            .iter()
            .filter(|row| &row.agency == agency && row.date == date)
            .cloned()
            .collect())
    }

    async fn calendars(&self, agency: &AgencyId) -> Result<Vec<CalendarRow>, StorageError> {
        Ok(self
            .calendars
            .iter()
            .filter(|row| &row.agency == agency)
            .cloned()
            .collect())
    }

    async fn active_calendars(
        &self,
        agency: &AgencyId,
        weekday: Weekday,
        date: ServiceDate,
    ) -> Result<Vec<CalendarRow>, StorageError> {
        Ok(self
            .calendars
            .iter()
            .filter(|row| &row.agency == agency && row.runs_on(weekday) && row.in_window(date))
            .cloned()
            .collect())
    }

    async fn trips(
        &self,
        agency: &AgencyId,
        route: &RouteId,
        direction: Option<DirectionId>,
        filter: &ServiceFilter,
    ) -> Result<Vec<TripRow>, StorageError> {
        Ok(self
            .trips
            .iter()
            .filter(|row| {
                &row.agency == agency
                    && &row.route == route
                    && direction.is_none_or(|d| row.direction == Some(d))
                    && filter.matches(&row.service)
            })
            .cloned()
            .collect())
    }

    async fn stop_times_at_stop(
        &self,
        agency: &AgencyId,
        stop: &StopId,
        trips: &[TripId],
        limit: usize,
    ) -> Result<Vec<StopTimeRow>, StorageError> {
        let mut rows: Vec<StopTimeRow> = self
            .stop_times
            .iter()
            .filter(|row| &row.agency == agency && &row.stop == stop && trips.contains(&row.trip))
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.departure_time);
        rows.truncate(limit);
        Ok(rows)
    }

    async fn stop_times_by_trip(
        &self,
        agency: &AgencyId,
        trip: &TripId,
    ) -> Result<Vec<StopTimeRow>, StorageError> {
        let mut rows: Vec<StopTimeRow> = self
            .stop_times
            .iter()
            .filter(|row| &row.agency == agency && &row.trip == trip)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.stop_sequence);
        Ok(rows)
    }
}
