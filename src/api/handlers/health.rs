use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptimeSeconds": state.uptime_seconds(),
    }))
}
