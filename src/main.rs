use dotenvy::dotenv;

use purchase_backend::{
    config::ServerConfig, services::rest::server::RestServer, utils::logging::init_logging,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let config = ServerConfig::new();
    let server = RestServer::new(AppState::new(), &config).await?;
    server.serve().await?;

    Ok(())
}
