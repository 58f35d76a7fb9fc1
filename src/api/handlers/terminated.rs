use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::api::{error::ApiResult, state::AppState};
use crate::domain::model::TerminatedEmployee;

pub async fn list_terminated_employees(
    State(state): State<AppState>,
) -> Json<Vec<TerminatedEmployee>> {
    let directory = state.directory.read().await;
    Json(directory.terminated_employees().to_vec())
}

pub async fn get_terminated_employee(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TerminatedEmployee>> {
    let Path(name) = name?;
    let directory = state.directory.read().await;
    Ok(Json(directory.terminated_employee(&name)?.clone()))
}
