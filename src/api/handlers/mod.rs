pub mod companies;
pub mod employees;
pub mod health;
pub mod terminated;
