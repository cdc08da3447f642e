use crate::dtos::{MessageResponse, ServerListParams};
use crate::models::{Server, ServerStatus};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use stub_core::error::AppError;

pub async fn list_servers(
    State(state): State<AppState>,
    Query(params): Query<ServerListParams>,
) -> Json<Vec<Server>> {
    let filter = params.status.unwrap_or_else(|| "pending".to_string());
    Json(state.store.list_servers(&filter))
}

pub async fn get_server(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<Server>, AppError> {
    state
        .store
        .get_server(&serial)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("server {} not found", serial)))
}

pub async fn confirm_server(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    transition(
        &state,
        &serial,
        ServerStatus::Confirmed,
        format!("Server {} confirmed", serial),
    )
}

pub async fn install_server(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    transition(
        &state,
        &serial,
        ServerStatus::Installed,
        format!("Server {} marked for install", serial),
    )
}

// No prior-state check: the transition endpoints overwrite unconditionally.
fn transition(
    state: &AppState,
    serial: &str,
    status: ServerStatus,
    message: String,
) -> Result<Json<MessageResponse>, AppError> {
    if state.store.set_server_status(serial, status) {
        tracing::info!(serial, status = status.as_str(), "Server status updated");
        Ok(Json(MessageResponse { message }))
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "server {} not found",
            serial
        )))
    }
}
