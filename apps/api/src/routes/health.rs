use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Probes the record store; any failure is reported as a database error.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.health_check().await?;

    Ok(Json(json!({
        "status": "ok",
        "database_connection": "successful",
    })))
}
