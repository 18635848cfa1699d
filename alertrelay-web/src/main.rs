use alertrelay_web::{create_app, AppState, WebConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("alertrelay_web=info".parse()?)
                .add_directive("alertrelay_core=info".parse()?),
        )
        .init();

    tracing::info!("Starting AlertRelay web server");

    let config = match WebConfig::load() {
        Ok(config) => {
            tracing::info!("Configuration loaded successfully, port: {}", config.port);
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    let addr = config.bind_address();
    let state = AppState::new(config)?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Starting server on {}...", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down AlertRelay web server...");
}
