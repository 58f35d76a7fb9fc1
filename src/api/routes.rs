//! Route table

use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};

use crate::api::{
    handlers::{companies, employees, health, terminated},
    middleware::log_requests,
    state::AppState,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        // Companies
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{id}",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/companies/{id}/with-employees",
            delete(companies::delete_company_with_employees),
        )
        // Employees
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/employees/{id}/terminate",
            post(employees::terminate_employee),
        )
        // Terminated employees
        .route(
            "/terminated-employees",
            get(terminated::list_terminated_employees),
        )
        .route(
            "/terminated-employees/{name}",
            get(terminated::get_terminated_employee),
        )
}

/// Full application router with request logging, ready to serve.
pub fn app(state: AppState) -> Router {
    api_routes().layer(from_fn(log_requests)).with_state(state)
}
