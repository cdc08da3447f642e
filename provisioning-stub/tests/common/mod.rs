use provisioning_stub::config::StubConfig;
use provisioning_stub::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub audit_log_path: String,
}

impl TestApp {
    /// Spawn the application on an ephemeral port with a per-test audit log
    /// path that does not exist unless `spawn_with_audit_log` wrote it.
    pub async fn spawn() -> Self {
        Self::spawn_inner(None).await
    }

    /// Spawn with an audit log file containing the given lines, in order.
    pub async fn spawn_with_audit_log(lines: &[&str]) -> Self {
        Self::spawn_inner(Some(lines)).await
    }

    async fn spawn_inner(audit_lines: Option<&[&str]>) -> Self {
        let audit_log_path = format!("target/test-audit-{}.log", Uuid::new_v4());
        if let Some(lines) = audit_lines {
            tokio::fs::create_dir_all("target")
                .await
                .expect("Failed to create target dir");
            tokio::fs::write(&audit_log_path, lines.join("\n"))
                .await
                .expect("Failed to write audit log fixture");
        }

        let mut config = StubConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.audit.log_path = audit_log_path.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections by polling the health
        // endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            audit_log_path,
        }
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_file(&self.audit_log_path).await;
    }
}
