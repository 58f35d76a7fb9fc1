use crate::core::employee_store::EmployeeStore;
use crate::core::ids::next_id;
use crate::domain::model::{Company, CompanyId};
use crate::utils::error::{DirectoryError, Result};

pub const COMPANY_HAS_EMPLOYEES: &str = "cannot delete a company with associated employees";

#[derive(Debug, Default, Clone)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Company] {
        &self.companies
    }

    pub fn get_by_id(&self, id: CompanyId) -> Result<&Company> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DirectoryError::not_found("Company", id))
    }

    pub fn create(&mut self, name: String) -> Company {
        let company = Company {
            id: next_id(self.companies.iter().map(|c| c.id)),
            name,
        };
        self.companies.push(company.clone());
        company
    }

    pub fn update(&mut self, id: CompanyId, name: String) -> Result<Company> {
        let company = self
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DirectoryError::not_found("Company", id))?;

        company.name = name;
        Ok(company.clone())
    }

    /// Refuses while any employee still points at the company.
    pub fn delete(&mut self, id: CompanyId, employees: &EmployeeStore) -> Result<Company> {
        let index = self.position(id)?;
        if employees.exists_for_company(id) {
            return Err(DirectoryError::conflict(COMPANY_HAS_EMPLOYEES));
        }
        Ok(self.companies.remove(index))
    }

    /// Cascade delete. Returns the removed company and the number of employees dropped.
    pub fn delete_with_employees(
        &mut self,
        id: CompanyId,
        employees: &mut EmployeeStore,
    ) -> Result<(Company, usize)> {
        let index = self.position(id)?;
        let removed = employees.remove_for_company(id);
        Ok((self.companies.remove(index), removed))
    }

    fn position(&self, id: CompanyId) -> Result<usize> {
        self.companies
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DirectoryError::not_found("Company", id))
    }
}
