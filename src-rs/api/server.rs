use std::net::SocketAddr;

use anyhow::Context;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::handlers::{handle_root, handle_task, AppState};

pub struct AgentServer {
    pub port: u16,
    pub state: AppState,
}

impl AgentServer {
    pub fn new(port: u16, state: AppState) -> Self {
        Self { port, state }
    }

    pub fn router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);

        Router::new()
            .route("/", get(handle_root))
            .route("/task", get(handle_task))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn start(&self) -> anyhow::Result<()> {
        let app = Self::router(self.state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let server = axum::Server::try_bind(&addr)
            .with_context(|| format!("failed to bind {}", addr))?
            .serve(app.into_make_service());
        info!(%addr, "coding agent listening");

        server
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed to listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
