//! Company handlers

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
use crate::domain::model::{Company, CompanyId, CompanyPayload};

pub async fn list_companies(State(state): State<AppState>) -> Json<Vec<Company>> {
    let directory = state.directory.read().await;
    Json(directory.companies().to_vec())
}

pub async fn get_company(
    State(state): State<AppState>,
    id: Result<Path<CompanyId>, PathRejection>,
) -> ApiResult<Json<Company>> {
    let Path(id) = id?;
    let directory = state.directory.read().await;
    Ok(Json(directory.company(id)?.clone()))
}

pub async fn create_company(
    State(state): State<AppState>,
    payload: Result<Json<CompanyPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let company = state.directory.write().await.create_company(payload);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/companies/{}", company.id))],
        Json(company),
    ))
}

pub async fn update_company(
    State(state): State<AppState>,
    id: Result<Path<CompanyId>, PathRejection>,
    payload: Result<Json<CompanyPayload>, JsonRejection>,
) -> ApiResult<Json<Company>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let company = state.directory.write().await.update_company(id, payload)?;
    Ok(Json(company))
}

pub async fn delete_company(
    State(state): State<AppState>,
    id: Result<Path<CompanyId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.directory.write().await.delete_company(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_company_with_employees(
    State(state): State<AppState>,
    id: Result<Path<CompanyId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state
        .directory
        .write()
        .await
        .delete_company_with_employees(id)?;
    Ok(StatusCode::NO_CONTENT)
}
