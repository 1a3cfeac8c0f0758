use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::{routing::get, serve::Serve, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::ServerConfig,
    services::rest::endpoints::{ping, purchase_confirmation},
    AppState,
};

pub struct RestServer {
    serve: Serve<Router, Router>,
    local_port: u16,
}

impl RestServer {
    pub async fn new(state: AppState, config: &ServerConfig) -> anyhow::Result<Self> {
        let router = Self::build_router(state);

        let listener = tokio::net::TcpListener::bind(SocketAddr::new(
            Ipv4Addr::UNSPECIFIED.into(),
            config.port,
        ))
        .await
        .context("Failed to bind address")?;

        let local_port = listener
            .local_addr()
            .context("Cannot get local port")?
            .port();

        Ok(RestServer {
            serve: axum::serve(listener, router),
            local_port,
        })
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Server running on port {}", self.local_port());

        self.serve.await.context("HTTP Server error")?;

        Ok(())
    }

    pub fn build_router(state: AppState) -> Router {
        Router::<AppState>::new()
            .route("/", get(super::root))
            .merge(ping::get_routes())
            .merge(purchase_confirmation::get_routes())
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }
}
