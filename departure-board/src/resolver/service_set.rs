//! Final active-service-set resolution.

use tracing::debug;

use crate::domain::ServiceFilter;

use super::calendar::CalendarOutcome;
use super::exceptions::ExceptionIndex;

/// Combine the calendar outcome with the date's exceptions.
///
/// Precedence: an explicit removal always wins over nominal or added
/// membership. With a calendar, the filter is the inclusion set
/// `(nominal ∪ added) \ removed`. Without one, added services (minus
/// removals) form the inclusion set; if nothing was added either, the
/// filter degrades to excluding only the removed services, so the trip
/// query runs negatively filtered rather than returning nothing. That
/// asymmetry is deliberate and load-bearing for exception-only feeds.
pub fn resolve_service_set(outcome: CalendarOutcome, index: ExceptionIndex) -> ServiceFilter {
    let ExceptionIndex { added, removed } = index;

    let filter = match outcome {
        CalendarOutcome::Nominal(nominal) => {
            let mut active = nominal;
            active.extend(added);
            active.retain(|service| !removed.contains(service));
            ServiceFilter::Include(active)
        }
        CalendarOutcome::NoCalendar => {
            if added.is_empty() {
                ServiceFilter::Exclude(removed)
            } else {
                let mut active = added;
                active.retain(|service| !removed.contains(service));
                ServiceFilter::Include(active)
            }
        }
    };

    debug!(?filter, "resolved active service set");
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceId;
    use std::collections::HashSet;

    fn set(ids: &[&str]) -> HashSet<ServiceId> {
        ids.iter().map(|s| ServiceId::new(*s)).collect()
    }

    fn index(added: &[&str], removed: &[&str]) -> ExceptionIndex {
        ExceptionIndex {
            added: set(added),
            removed: set(removed),
        }
    }

    #[test]
    fn nominal_union_added_minus_removed() {
        let filter = resolve_service_set(
            CalendarOutcome::Nominal(set(&["S1", "S2"])),
            index(&["S3"], &["S2"]),
        );

        assert_eq!(filter, ServiceFilter::Include(set(&["S1", "S3"])));
    }

    #[test]
    fn removal_dominates_addition() {
        // S2 is both added and removed on the same date
        let filter = resolve_service_set(
            CalendarOutcome::Nominal(set(&["S1"])),
            index(&["S2"], &["S2"]),
        );

        assert_eq!(filter, ServiceFilter::Include(set(&["S1"])));
    }

    #[test]
    fn no_calendar_with_additions() {
        let filter =
            resolve_service_set(CalendarOutcome::NoCalendar, index(&["S1", "S2"], &["S2"]));

        assert_eq!(filter, ServiceFilter::Include(set(&["S1"])));
    }

    #[test]
    fn no_calendar_without_additions_filters_negatively() {
        let filter = resolve_service_set(CalendarOutcome::NoCalendar, index(&[], &["S9"]));

        assert_eq!(filter, ServiceFilter::Exclude(set(&["S9"])));
    }

    #[test]
    fn no_calendar_no_exceptions_excludes_nothing() {
        let filter = resolve_service_set(CalendarOutcome::NoCalendar, ExceptionIndex::default());

        assert_eq!(filter, ServiceFilter::Exclude(HashSet::new()));
    }

    #[test]
    fn empty_inclusion_set_is_valid() {
        // Everything nominal was removed; zero trips downstream, not a panic
        let filter = resolve_service_set(
            CalendarOutcome::Nominal(set(&["S1"])),
            index(&[], &["S1"]),
        );

        assert_eq!(filter, ServiceFilter::Include(HashSet::new()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ServiceId;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn service_set() -> impl Strategy<Value = HashSet<ServiceId>> {
        proptest::collection::hash_set("S[0-9]", 0..8)
            .prop_map(|set| set.into_iter().map(ServiceId::new).collect())
    }

    proptest! {
        /// A removed service never appears in an inclusion set, whatever
        /// the calendar and additions say
        #[test]
        fn removal_always_wins(
            nominal in service_set(),
            added in service_set(),
            removed in service_set(),
        ) {
            let filter = resolve_service_set(
                CalendarOutcome::Nominal(nominal),
                ExceptionIndex { added, removed: removed.clone() },
            );

            for service in &removed {
                prop_assert!(!filter.matches(service));
            }
        }

        /// With a calendar, services neither nominal nor added never pass
        #[test]
        fn inclusion_never_invents_services(
            nominal in service_set(),
            added in service_set(),
            removed in service_set(),
        ) {
            let filter = resolve_service_set(
                CalendarOutcome::Nominal(nominal.clone()),
                ExceptionIndex { added: added.clone(), removed },
            );

            let outsider = ServiceId::new("OUTSIDER");
            prop_assume!(!nominal.contains(&outsider) && !added.contains(&outsider));
            prop_assert!(!filter.matches(&outsider));
        }

        /// Without a calendar or additions, exactly the removed services
        /// are filtered out
        #[test]
        fn exclusion_filters_exactly_the_removed(removed in service_set()) {
            let filter = resolve_service_set(
                CalendarOutcome::NoCalendar,
                ExceptionIndex { added: HashSet::new(), removed: removed.clone() },
            );

            prop_assert_eq!(&filter, &ServiceFilter::Exclude(removed.clone()));
            for service in &removed {
                prop_assert!(!filter.matches(service));
            }
            prop_assert!(filter.matches(&ServiceId::new("ANYTHING_ELSE")));
        }
    }
}
