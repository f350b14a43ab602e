use veranda_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_level = std::env::var("LOG_LEVEL").ok();
    veranda_server::init_logger_with_file(log_level.as_deref(), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Veranda server starting"
    );

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);
    server.run().await
}
