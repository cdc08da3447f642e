use crate::build_router;
use crate::config::StubConfig;
use crate::store::StubStore;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use stub_core::error::AppError;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub config: StubConfig,
    pub store: Arc<StubStore>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: StubConfig) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store: Arc::new(StubStore::seeded()),
        };

        let app = build_router(state);

        // Port 0 lets tests bind an ephemeral port.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
