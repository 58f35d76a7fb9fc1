//! Facade over the three stores.
//!
//! Cross-store rules (the company delete guard, cascade delete and termination)
//! go through here so that one `&mut Directory` covers every collection they touch.
//! The HTTP layer keeps a single `Directory` behind one lock.

use std::sync::Arc;

use crate::core::company_store::CompanyStore;
use crate::core::employee_store::EmployeeStore;
use crate::core::terminated_store::TerminatedEmployeeStore;
use crate::core::termination::{SeverancePolicy, TerminationService};
use crate::domain::model::{
    Company, CompanyId, CompanyPayload, Employee, EmployeeId, EmployeePayload, TerminatedEmployee,
};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::Result;

#[derive(Debug, Default)]
pub struct Directory {
    companies: CompanyStore,
    employees: EmployeeStore,
    terminated: TerminatedEmployeeStore,
    termination: TerminationService,
}

impl Directory {
    pub fn new(clock: Arc<dyn Clock>, policy: SeverancePolicy) -> Self {
        Self {
            companies: CompanyStore::new(),
            employees: EmployeeStore::new(),
            terminated: TerminatedEmployeeStore::new(),
            termination: TerminationService::new(clock, policy),
        }
    }

    pub fn with_policy(policy: SeverancePolicy) -> Self {
        Self::new(Arc::new(SystemClock), policy)
    }

    // companies

    pub fn companies(&self) -> &[Company] {
        self.companies.list()
    }

    pub fn company(&self, id: CompanyId) -> Result<&Company> {
        tracing::debug!("Looking up company {}", id);
        self.companies.get_by_id(id)
    }

    pub fn create_company(&mut self, payload: CompanyPayload) -> Company {
        let company = self.companies.create(payload.name);
        tracing::info!("Created company {} ({})", company.id, company.name);
        company
    }

    pub fn update_company(&mut self, id: CompanyId, payload: CompanyPayload) -> Result<Company> {
        let company = self.companies.update(id, payload.name)?;
        tracing::info!("Updated company {}", company.id);
        Ok(company)
    }

    pub fn delete_company(&mut self, id: CompanyId) -> Result<()> {
        match self.companies.delete(id, &self.employees) {
            Ok(company) => {
                tracing::info!("Deleted company {} ({})", company.id, company.name);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Refused to delete company {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub fn delete_company_with_employees(&mut self, id: CompanyId) -> Result<()> {
        let (company, removed) = self
            .companies
            .delete_with_employees(id, &mut self.employees)?;
        tracing::info!(
            "Deleted company {} ({}) together with {} employee(s)",
            company.id,
            company.name,
            removed
        );
        Ok(())
    }

    // employees

    pub fn employees(&self) -> &[Employee] {
        self.employees.list()
    }

    pub fn employee(&self, id: EmployeeId) -> Result<&Employee> {
        tracing::debug!("Looking up employee {}", id);
        self.employees.get_by_id(id)
    }

    pub fn create_employee(&mut self, payload: EmployeePayload) -> Employee {
        let employee = self
            .employees
            .create(payload.name, payload.company_id, payload.hire_date);
        tracing::info!(
            "Created employee {} ({}) for company {}",
            employee.id,
            employee.name,
            employee.company_id
        );
        employee
    }

    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        payload: EmployeePayload,
    ) -> Result<Employee> {
        let employee =
            self.employees
                .update(id, payload.name, payload.company_id, payload.hire_date)?;
        tracing::info!("Updated employee {}", employee.id);
        Ok(employee)
    }

    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<()> {
        let employee = self.employees.delete(id)?;
        tracing::info!("Deleted employee {} ({})", employee.id, employee.name);
        Ok(())
    }

    pub fn terminate_employee(&mut self, id: EmployeeId) -> Result<TerminatedEmployee> {
        let record = self
            .termination
            .terminate(&mut self.employees, &mut self.terminated, id)?;
        tracing::info!(
            "Terminated employee {} ({}), severance pay {}",
            record.id,
            record.name,
            record.severance_pay
        );
        Ok(record)
    }

    // terminated employees

    pub fn terminated_employees(&self) -> &[TerminatedEmployee] {
        self.terminated.list()
    }

    pub fn terminated_employee(&self, name: &str) -> Result<&TerminatedEmployee> {
        tracing::debug!("Looking up terminated employee '{}'", name);
        self.terminated.get_by_name(name)
    }
}
