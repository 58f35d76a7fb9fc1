use std::sync::Arc;

use crate::core::employee_store::EmployeeStore;
use crate::core::terminated_store::TerminatedEmployeeStore;
use crate::domain::model::{EmployeeId, TerminatedEmployee};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::Result;

pub use crate::domain::model::SeverancePolicy;

/// Moves employees from the active store into the terminated store.
pub struct TerminationService {
    clock: Arc<dyn Clock>,
    policy: SeverancePolicy,
}

impl TerminationService {
    pub fn new(clock: Arc<dyn Clock>, policy: SeverancePolicy) -> Self {
        Self { clock, policy }
    }

    pub fn terminate(
        &self,
        employees: &mut EmployeeStore,
        terminated: &mut TerminatedEmployeeStore,
        employee_id: EmployeeId,
    ) -> Result<TerminatedEmployee> {
        let employee = employees.get_by_id(employee_id)?;

        let termination_date = self.clock.now();
        let severance_pay = self.policy.severance_pay(employee.hire_date, termination_date);

        let record = TerminatedEmployee {
            id: employee.id,
            name: employee.name.clone(),
            hire_date: employee.hire_date,
            termination_date,
            severance_pay,
        };

        // append first, then remove
        terminated.append(record.clone());
        employees.delete(employee_id)?;

        Ok(record)
    }
}

impl Default for TerminationService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), SeverancePolicy::default())
    }
}

impl std::fmt::Debug for TerminationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminationService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
