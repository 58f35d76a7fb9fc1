use chrono::{DateTime, Utc};

use crate::core::ids::next_id;
use crate::domain::model::{CompanyId, Employee, EmployeeId};
use crate::utils::error::{DirectoryError, Result};

#[derive(Debug, Default, Clone)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DirectoryError::not_found("Employee", id))
    }

    pub fn create(
        &mut self,
        name: String,
        company_id: CompanyId,
        hire_date: DateTime<Utc>,
    ) -> Employee {
        let employee = Employee {
            id: next_id(self.employees.iter().map(|e| e.id)),
            name,
            company_id,
            hire_date,
        };
        self.employees.push(employee.clone());
        employee
    }

    pub fn update(
        &mut self,
        id: EmployeeId,
        name: String,
        company_id: CompanyId,
        hire_date: DateTime<Utc>,
    ) -> Result<Employee> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DirectoryError::not_found("Employee", id))?;

        employee.name = name;
        employee.company_id = company_id;
        employee.hire_date = hire_date;
        Ok(employee.clone())
    }

    /// Removes and returns the employee.
    pub fn delete(&mut self, id: EmployeeId) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DirectoryError::not_found("Employee", id))?;
        Ok(self.employees.remove(index))
    }

    pub fn exists_for_company(&self, company_id: CompanyId) -> bool {
        self.employees.iter().any(|e| e.company_id == company_id)
    }

    /// Drops every employee of `company_id` and returns how many went.
    pub fn remove_for_company(&mut self, company_id: CompanyId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| e.company_id != company_id);
        before - self.employees.len()
    }
}
