use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ServerListParams {
    /// Defaults to "pending"; an empty string disables filtering.
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuditLogParams {
    pub order: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyParams {
    pub serial: Option<String>,
}

/// Create/update body for config templates. Every field is optional: on
/// create, absent fields default to "" (systemType to "CentOS"); on update,
/// absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub system_type: Option<String>,
    pub system_version: Option<String>,
    pub config_content: Option<String>,
    pub kernel_params: Option<String>,
    pub packages: Option<String>,
}

/// Listing view of a template; content fields are deliberately omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: i64,
    pub name: String,
    pub system_type: String,
    pub system_version: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
