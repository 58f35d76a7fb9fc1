use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CompanyId = i64;
pub type EmployeeId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub company_id: CompanyId,
    pub hire_date: DateTime<Utc>,
}

/// Snapshot of an employee at the moment of termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminatedEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub hire_date: DateTime<Utc>,
    pub termination_date: DateTime<Utc>,
    pub severance_pay: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverancePolicy {
    pub days_per_year: i64,
    pub amount_per_year: u64,
}

impl Default for SeverancePolicy {
    fn default() -> Self {
        Self {
            days_per_year: 365,
            amount_per_year: 1000,
        }
    }
}

impl SeverancePolicy {
    /// Pays `amount_per_year` for every full year served.
    ///
    /// Whole days are truncated toward zero, then divided by `days_per_year` with
    /// integer division, so partial years pay nothing. A hire date after the
    /// termination date pays 0, and an oversized policy caps at `u64::MAX`.
    pub fn severance_pay(&self, hire_date: DateTime<Utc>, termination_date: DateTime<Utc>) -> u64 {
        let days = (termination_date - hire_date).num_days();
        let years = days / self.days_per_year.max(1);
        u64::try_from(years)
            .unwrap_or(0)
            .saturating_mul(self.amount_per_year)
    }
}

/// Body of `POST /companies` and `PUT /companies/{id}`. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
}

/// Body of `POST /employees` and `PUT /employees/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    #[serde(default)]
    pub company_id: CompanyId,
    #[serde(deserialize_with = "crate::domain::dates::deserialize_flexible")]
    pub hire_date: DateTime<Utc>,
}
