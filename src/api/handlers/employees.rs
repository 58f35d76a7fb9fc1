//! Employee handlers, including termination

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::api::{error::ApiResult, state::AppState};
use crate::domain::model::{Employee, EmployeeId, EmployeePayload, TerminatedEmployee};

pub async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    let directory = state.directory.read().await;
    Json(directory.employees().to_vec())
}

pub async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    let directory = state.directory.read().await;
    Ok(Json(directory.employee(id)?.clone()))
}

pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let employee = state.directory.write().await.create_employee(payload);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/employees/{}", employee.id))],
        Json(employee),
    ))
}

pub async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let employee = state.directory.write().await.update_employee(id, payload)?;
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.directory.write().await.delete_employee(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn terminate_employee(
    State(state): State<AppState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<TerminatedEmployee>> {
    let Path(id) = id?;
    let record = state.directory.write().await.terminate_employee(id)?;
    Ok(Json(record))
}
