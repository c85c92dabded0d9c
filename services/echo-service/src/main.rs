use echo_service::config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    common::init_tracing();

    if let Err(err) = run(ServerConfig::from_env()).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, echo_service::app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
