use serde::{Deserialize, Serialize};

/// Provisioning lifecycle of a server record. The flow is
/// pending -> confirmed -> installed, but transitions are not enforced:
/// the endpoints overwrite the status unconditionally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Pending,
    Confirmed,
    Installed,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Pending => "pending",
            ServerStatus::Confirmed => "confirmed",
            ServerStatus::Installed => "installed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub serial: String,
    pub hostname: String,
    pub ip_address: String,
    pub mac_address: String,
    pub status: ServerStatus,
}
