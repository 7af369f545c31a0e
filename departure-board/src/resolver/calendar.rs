//! Weekly calendar matching.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{AgencyId, ServiceDate, ServiceId};
use crate::storage::ScheduleStorage;

use super::error::ResolveError;

/// What the weekly calendar says about the reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarOutcome {
    /// The agency carries no calendar rows at all; all of its scheduling
    /// comes through added/removed exceptions.
    NoCalendar,

    /// Services whose weekday flag is set for the date and whose validity
    /// window contains it.
    Nominal(HashSet<ServiceId>),
}

/// Determine which services are nominally active on the date.
///
/// An agency that declares a calendar is expected to have at least one
/// row matching the date's weekday and validity window, so an empty match
/// is a hard stop ([`ResolveError::NoActiveService`]) rather than an
/// empty set - even when exceptions add service for the date.
pub async fn match_calendars<S: ScheduleStorage>(
    storage: &S,
    agency: &AgencyId,
    date: ServiceDate,
) -> Result<CalendarOutcome, ResolveError> {
    let all = storage.calendars(agency).await?;
    if all.is_empty() {
        debug!(agency = %agency, "no calendar rows; agency schedules through exceptions only");
        return Ok(CalendarOutcome::NoCalendar);
    }

    let active = storage.active_calendars(agency, date.weekday(), date).await?;
    if active.is_empty() {
        return Err(ResolveError::NoActiveService);
    }

    Ok(CalendarOutcome::Nominal(
        active.into_iter().map(|row| row.service).collect(),
    ))
}
