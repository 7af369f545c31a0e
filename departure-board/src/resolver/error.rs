//! Resolution error types.

use crate::storage::StorageError;

/// Errors from departure resolution.
///
/// Every variant is terminal for the current request: the pipeline
/// surfaces the first failure and halts, with no retries and no partial
/// results.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A required identifier was missing from the request.
    #[error("no {field} specified")]
    MissingField { field: &'static str },

    /// The storage collaborator failed; propagated immediately.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Calendar rows exist for the agency but none match the date.
    #[error("no service for this date")]
    NoActiveService,

    /// Service resolved but no trips match the route and direction.
    #[error("no trips for this date")]
    NoTrips,

    /// Trips resolved but no departures found at the stop.
    #[error("no times available for this stop on this date")]
    NoStopTimes,
}
