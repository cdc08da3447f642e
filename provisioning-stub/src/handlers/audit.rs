use crate::dtos::AuditLogParams;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

/// Reads the externally written newline-delimited JSON audit log. Lines that
/// fail to parse are skipped; a missing (or unreadable) file yields an empty
/// list, never an error.
pub async fn read_logs(
    State(state): State<AppState>,
    Query(params): Query<AuditLogParams>,
) -> Json<Vec<Value>> {
    let path = &state.config.audit.log_path;
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path, error = %err, "Failed to read audit log");
            }
            return Json(Vec::new());
        }
    };

    let mut entries: Vec<Value> = contents
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    // Ordering applies to the full record set, pagination to the result.
    if params.order.as_deref().unwrap_or("desc") == "desc" {
        entries.reverse();
    }

    let offset = params.offset.unwrap_or(0).max(0) as usize;
    let limit = match params.limit.unwrap_or(100) {
        l if l <= 0 => 100,
        l => l as usize,
    };

    Json(entries.into_iter().skip(offset).take(limit).collect())
}
