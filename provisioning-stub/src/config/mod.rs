use std::env;
use stub_core::config as core_config;
use stub_core::error::AppError;

#[derive(Debug, Clone)]
pub struct StubConfig {
    pub common: core_config::Config,
    pub audit: AuditConfig,
}

#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Path to the externally written newline-delimited JSON audit log.
    /// The stub only reads it; absence is not an error.
    pub log_path: String,
}

impl StubConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and APP__ prefixed overrides.
        let common = core_config::Config::load()?;

        Ok(StubConfig {
            common,
            audit: AuditConfig {
                log_path: env::var("AUDIT_LOG_PATH")
                    .unwrap_or_else(|_| "./logs/audit.log".to_string()),
            },
        })
    }
}
