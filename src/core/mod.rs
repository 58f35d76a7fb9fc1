pub mod company_store;
pub mod directory;
pub mod employee_store;
pub mod ids;
pub mod terminated_store;
pub mod termination;

pub use crate::domain::model::{Company, Employee, TerminatedEmployee};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
