use crate::dtos::{ApplyParams, CreatedResponse, MessageResponse, TemplatePayload, TemplateSummary};
use crate::models::ConfigTemplate;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use stub_core::error::AppError;

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.store.list_template_summaries())
}

pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConfigTemplate>, AppError> {
    let id = parse_template_id(&id)?;
    state
        .store
        .get_template(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("template {} not found", id)))
}

pub async fn create_template(State(state): State<AppState>, body: Bytes) -> Json<CreatedResponse> {
    let payload = parse_payload(&body);
    let id = state.store.create_template(payload);
    tracing::info!(id, "Config template created");
    Json(CreatedResponse { id })
}

pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_template_id(&id)?;
    let payload = parse_payload(&body);
    if state.store.update_template(id, payload) {
        Ok(Json(MessageResponse {
            message: "updated".to_string(),
        }))
    } else {
        Err(AppError::NotFound(anyhow::anyhow!(
            "template {} not found",
            id
        )))
    }
}

/// Simulation only: reports success without persisting any relationship and
/// without checking that either the template or the serial exists.
pub async fn apply_template(
    Path(id): Path<String>,
    Query(params): Query<ApplyParams>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_template_id(&id)?;
    let serial = params.serial.unwrap_or_default();
    Ok(Json(MessageResponse {
        message: format!("Template {} applied to {}", id, serial),
    }))
}

fn parse_template_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("invalid template id: {}", raw)))
}

// Malformed or absent bodies degrade to an empty payload instead of being
// rejected. Contractual permissive parsing, inherited from the backend this
// stub stands in for.
fn parse_payload(body: &Bytes) -> TemplatePayload {
    serde_json::from_slice(body).unwrap_or_default()
}
