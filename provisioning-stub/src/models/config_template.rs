use serde::{Deserialize, Serialize};

/// A named bundle of installation parameters applicable to a server.
/// Ids are assigned by the store and strictly increasing; records are
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTemplate {
    pub id: i64,
    pub name: String,
    pub system_type: String,
    pub system_version: String,
    pub description: String,
    pub config_content: String,
    pub kernel_params: String,
    pub packages: String,
}
