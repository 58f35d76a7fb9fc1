use crate::domain::model::TerminatedEmployee;
use crate::utils::error::{DirectoryError, Result};

/// Append-only. Records are never updated or removed once written.
#[derive(Debug, Default, Clone)]
pub struct TerminatedEmployeeStore {
    records: Vec<TerminatedEmployee>,
}

impl TerminatedEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[TerminatedEmployee] {
        &self.records
    }

    /// First exact, case-sensitive match. Names are not unique.
    pub fn get_by_name(&self, name: &str) -> Result<&TerminatedEmployee> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| DirectoryError::not_found("Terminated employee", name))
    }

    pub(crate) fn append(&mut self, record: TerminatedEmployee) {
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, name: &str, severance_pay: u64) -> TerminatedEmployee {
        TerminatedEmployee {
            id,
            name: name.to_string(),
            hire_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            termination_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            severance_pay,
        }
    }

    #[test]
    fn test_get_by_name_returns_first_match() {
        let mut store = TerminatedEmployeeStore::new();
        store.append(record(1, "Bob", 3000));
        store.append(record(2, "Bob", 0));

        let found = store.get_by_name("Bob").unwrap();
        assert_eq!(found.id, 1);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_get_by_name_is_case_sensitive() {
        let mut store = TerminatedEmployeeStore::new();
        store.append(record(1, "Bob", 3000));

        let err = store.get_by_name("bob").unwrap_err();
        assert_eq!(err.to_string(), "Terminated employee 'bob' not found");
    }
}
