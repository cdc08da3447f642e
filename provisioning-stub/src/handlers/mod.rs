pub mod audit;
pub mod configs;
pub mod health;
pub mod servers;

use stub_core::error::AppError;

/// Fallback for any unmatched path or method.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("not found"))
}
