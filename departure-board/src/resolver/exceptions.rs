//! Date-specific exception index.

use std::collections::HashSet;

use crate::domain::{AgencyId, ExceptionType, ServiceDate, ServiceId};
use crate::storage::{ScheduleStorage, StorageError};

/// The date's exceptions, partitioned into added and removed services.
///
/// An empty index (no exception rows for the date) is the normal case,
/// not an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExceptionIndex {
    /// Services added on the date by exception.
    pub added: HashSet<ServiceId>,

    /// Services removed on the date by exception.
    pub removed: HashSet<ServiceId>,
}

impl ExceptionIndex {
    /// Load and partition all exception rows for (agency, date).
    pub async fn load<S: ScheduleStorage>(
        storage: &S,
        agency: &AgencyId,
        date: ServiceDate,
    ) -> Result<Self, StorageError> {
        let rows = storage.calendar_exceptions(agency, date).await?;

        let mut index = Self::default();
        for row in rows {
            match row.exception_type {
                ExceptionType::Added => index.added.insert(row.service),
                ExceptionType::Removed => index.removed.insert(row.service),
            };
        }
        Ok(index)
    }

    /// Returns true if no exceptions apply to the date.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalendarExceptionRow;
    use crate::storage::MemoryStorage;

    fn agency() -> AgencyId {
        AgencyId::new("metro")
    }

    fn date() -> ServiceDate {
        ServiceDate::parse("20240101").unwrap()
    }

    fn exception(service: &str, date: &str, exception_type: ExceptionType) -> CalendarExceptionRow {
        CalendarExceptionRow {
            agency: agency(),
            service: ServiceId::new(service),
            date: ServiceDate::parse(date).unwrap(),
            exception_type,
        }
    }

    #[tokio::test]
    async fn partitions_added_and_removed() {
        let mut storage = MemoryStorage::new();
        storage.add_exception(exception("HOLIDAY", "20240101", ExceptionType::Added));
        storage.add_exception(exception("WKDY", "20240101", ExceptionType::Removed));
        storage.add_exception(exception("EXPRESS", "20240101", ExceptionType::Removed));

        let index = ExceptionIndex::load(&storage, &agency(), date()).await.unwrap();

        assert_eq!(index.added, HashSet::from([ServiceId::new("HOLIDAY")]));
        assert_eq!(
            index.removed,
            HashSet::from([ServiceId::new("WKDY"), ServiceId::new("EXPRESS")])
        );
    }

    #[tokio::test]
    async fn no_rows_is_an_empty_index_not_an_error() {
        let storage = MemoryStorage::new();

        let index = ExceptionIndex::load(&storage, &agency(), date()).await.unwrap();

        assert!(index.is_empty());
        assert!(index.added.is_empty());
        assert!(index.removed.is_empty());
    }

    #[tokio::test]
    async fn other_dates_are_ignored() {
        let mut storage = MemoryStorage::new();
        storage.add_exception(exception("S1", "20240102", ExceptionType::Added));

        let index = ExceptionIndex::load(&storage, &agency(), date()).await.unwrap();

        assert!(index.is_empty());
    }
}
