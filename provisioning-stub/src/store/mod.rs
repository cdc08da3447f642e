use crate::dtos::{TemplatePayload, TemplateSummary};
use crate::models::{ConfigTemplate, Server, ServerStatus};
use std::sync::{Mutex, MutexGuard};

/// In-memory state backing the stub: the seeded server inventory and the
/// config template table. Owned by the application and shared through the
/// axum state; each operation takes its collection lock exactly once, so
/// every read or mutation appears atomic to concurrent requests.
#[derive(Debug)]
pub struct StubStore {
    servers: Mutex<Vec<Server>>,
    templates: Mutex<TemplateTable>,
}

#[derive(Debug)]
struct TemplateTable {
    rows: Vec<ConfigTemplate>,
    next_id: i64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock only means another request panicked mid-operation;
    // the data is still a valid snapshot for a dev stub.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StubStore {
    /// Fixed seed data: two pending servers and two base templates, with
    /// template ids continuing from 3.
    pub fn seeded() -> Self {
        let servers = vec![
            Server {
                serial: "ABC123".to_string(),
                hostname: "srv-abc".to_string(),
                ip_address: "192.168.88.10".to_string(),
                mac_address: "00:11:22:33:44:55".to_string(),
                status: ServerStatus::Pending,
            },
            Server {
                serial: "XYZ789".to_string(),
                hostname: "srv-xyz".to_string(),
                ip_address: "192.168.88.11".to_string(),
                mac_address: "66:77:88:99:AA:BB".to_string(),
                status: ServerStatus::Pending,
            },
        ];

        let rows = vec![
            ConfigTemplate {
                id: 1,
                name: "CentOS7-Base".to_string(),
                system_type: "CentOS".to_string(),
                system_version: "7".to_string(),
                description: "Base install".to_string(),
                config_content: "#kickstart".to_string(),
                kernel_params: "text".to_string(),
                packages: "vim,net-tools".to_string(),
            },
            ConfigTemplate {
                id: 2,
                name: "Ubuntu20-Base".to_string(),
                system_type: "Ubuntu".to_string(),
                system_version: "20.04".to_string(),
                description: "Base install".to_string(),
                config_content: "#preseed".to_string(),
                kernel_params: "auto".to_string(),
                packages: "curl,wget".to_string(),
            },
        ];

        Self {
            servers: Mutex::new(servers),
            templates: Mutex::new(TemplateTable { rows, next_id: 3 }),
        }
    }

    /// An empty filter string means no filtering; an unknown status string
    /// simply matches nothing.
    pub fn list_servers(&self, status_filter: &str) -> Vec<Server> {
        lock(&self.servers)
            .iter()
            .filter(|s| status_filter.is_empty() || s.status.as_str() == status_filter)
            .cloned()
            .collect()
    }

    pub fn get_server(&self, serial: &str) -> Option<Server> {
        lock(&self.servers)
            .iter()
            .find(|s| s.serial == serial)
            .cloned()
    }

    /// Unconditional overwrite; out-of-order transitions are permitted.
    /// Returns false when the serial is unknown.
    pub fn set_server_status(&self, serial: &str, status: ServerStatus) -> bool {
        match lock(&self.servers).iter_mut().find(|s| s.serial == serial) {
            Some(server) => {
                server.status = status;
                true
            }
            None => false,
        }
    }

    pub fn list_template_summaries(&self) -> Vec<TemplateSummary> {
        lock(&self.templates)
            .rows
            .iter()
            .map(|t| TemplateSummary {
                id: t.id,
                name: t.name.clone(),
                system_type: t.system_type.clone(),
                system_version: t.system_version.clone(),
            })
            .collect()
    }

    pub fn get_template(&self, id: i64) -> Option<ConfigTemplate> {
        lock(&self.templates)
            .rows
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Assigns the next sequential id and returns it. Absent fields default
    /// to "" except systemType, which defaults to "CentOS".
    pub fn create_template(&self, payload: TemplatePayload) -> i64 {
        let mut table = lock(&self.templates);
        let id = table.next_id;
        table.next_id += 1;
        table.rows.push(ConfigTemplate {
            id,
            name: payload.name.unwrap_or_default(),
            system_type: payload
                .system_type
                .unwrap_or_else(|| "CentOS".to_string()),
            system_version: payload.system_version.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            config_content: payload.config_content.unwrap_or_default(),
            kernel_params: payload.kernel_params.unwrap_or_default(),
            packages: payload.packages.unwrap_or_default(),
        });
        id
    }

    /// Overwrites only the fields present in the payload; the id is
    /// immutable. Returns false when the id is unknown.
    pub fn update_template(&self, id: i64, payload: TemplatePayload) -> bool {
        let mut table = lock(&self.templates);
        let Some(row) = table.rows.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if let Some(name) = payload.name {
            row.name = name;
        }
        if let Some(description) = payload.description {
            row.description = description;
        }
        if let Some(system_type) = payload.system_type {
            row.system_type = system_type;
        }
        if let Some(system_version) = payload.system_version {
            row.system_version = system_version;
        }
        if let Some(config_content) = payload.config_content {
            row.config_content = config_content;
        }
        if let Some(kernel_params) = payload.kernel_params {
            row.kernel_params = kernel_params;
        }
        if let Some(packages) = payload.packages {
            row.packages = packages;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_servers_are_pending() {
        let store = StubStore::seeded();
        let servers = store.list_servers("pending");
        assert_eq!(servers.len(), 2);
        assert!(servers.iter().all(|s| s.status == ServerStatus::Pending));
    }

    #[test]
    fn empty_filter_lists_all_statuses() {
        let store = StubStore::seeded();
        assert!(store.set_server_status("ABC123", ServerStatus::Installed));
        assert_eq!(store.list_servers("").len(), 2);
        assert_eq!(store.list_servers("pending").len(), 1);
        assert_eq!(store.list_servers("installed").len(), 1);
    }

    #[test]
    fn unknown_status_filter_matches_nothing() {
        let store = StubStore::seeded();
        assert!(store.list_servers("decommissioned").is_empty());
    }

    #[test]
    fn status_overwrite_skips_intermediate_states() {
        let store = StubStore::seeded();
        assert!(store.set_server_status("XYZ789", ServerStatus::Installed));
        let server = store.get_server("XYZ789").unwrap();
        assert_eq!(server.status, ServerStatus::Installed);
    }

    #[test]
    fn set_status_on_unknown_serial_reports_missing() {
        let store = StubStore::seeded();
        assert!(!store.set_server_status("NOPE", ServerStatus::Confirmed));
    }

    #[test]
    fn template_ids_are_sequential_from_three() {
        let store = StubStore::seeded();
        let first = store.create_template(TemplatePayload::default());
        let second = store.create_template(TemplatePayload::default());
        assert_eq!(first, 3);
        assert_eq!(second, 4);
    }

    #[test]
    fn create_defaults_system_type_to_centos() {
        let store = StubStore::seeded();
        let id = store.create_template(TemplatePayload {
            name: Some("Test".to_string()),
            ..Default::default()
        });
        let template = store.get_template(id).unwrap();
        assert_eq!(template.name, "Test");
        assert_eq!(template.system_type, "CentOS");
        assert_eq!(template.system_version, "");
        assert_eq!(template.packages, "");
    }

    #[test]
    fn update_changes_only_present_fields() {
        let store = StubStore::seeded();
        assert!(store.update_template(
            1,
            TemplatePayload {
                description: Some("new".to_string()),
                ..Default::default()
            },
        ));
        let template = store.get_template(1).unwrap();
        assert_eq!(template.description, "new");
        assert_eq!(template.name, "CentOS7-Base");
        assert_eq!(template.config_content, "#kickstart");
    }

    #[test]
    fn update_unknown_id_reports_missing() {
        let store = StubStore::seeded();
        assert!(!store.update_template(999, TemplatePayload::default()));
    }

    #[test]
    fn summaries_cover_all_templates() {
        let store = StubStore::seeded();
        let summaries = store.list_template_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 1);
        assert_eq!(summaries[1].name, "Ubuntu20-Base");
    }
}
