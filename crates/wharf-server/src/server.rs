use tokio::net::TcpListener;

use wharf_core::DemoSeeder;

use crate::config::PubConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Wharf pub server.
pub struct WharfServer {
    state: AppState,
}

impl WharfServer {
    pub fn new(config: PubConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    pub fn config(&self) -> &PubConfig {
        &self.state.config
    }

    /// Shared handler state (useful for testing).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Seed the demo workspace and serve requests until shutdown.
    pub async fn serve(self) -> ServerResult<()> {
        DemoSeeder::ensure_seeded(&self.state.registry).await?;
        let bind_addr = self.state.config.bind_addr;
        let app = self.router();
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("wharf pub listening on http://{bind_addr}");
        axum::serve(listener, app)
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))
    }
}
