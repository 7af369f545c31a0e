//! Service-set filter shape for trip queries.

use std::collections::HashSet;

use super::ids::ServiceId;

/// The resolved service-set filter handed to the trip query.
///
/// Resolution normally produces an explicit inclusion set. When an agency
/// has no calendar at all and no service was added by exception for the
/// date, the filter is instead a negative one: every trip runs except
/// those whose service was explicitly removed. Both shapes are first-class
/// so the trip query can pattern-match rather than inspect flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFilter {
    /// Only trips whose service identifier is in the set.
    Include(HashSet<ServiceId>),

    /// Every trip except those whose service identifier is in the set.
    Exclude(HashSet<ServiceId>),
}

impl ServiceFilter {
    /// Returns true if a trip with the given service identifier passes.
    pub fn matches(&self, service: &ServiceId) -> bool {
        match self {
            Self::Include(set) => set.contains(service),
            Self::Exclude(set) => !set.contains(service),
        }
    }
}
