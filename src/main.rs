use anyhow::Result;
use axum::Router;
use axum_serverless::{app, config::Config, types::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let openapi_prefix = match config.stage.prefix() {
        prefix if prefix.is_empty() => "/".to_string(),
        prefix => prefix,
    };
    tracing::info!(stage = %config.stage, "OpenAPI prefix: {}", openapi_prefix);

    let addr = config.bind_addr()?;
    let app = app::build_router(AppState::new(config)?);

    #[cfg(feature = "lambda")]
    if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        tracing::info!("running on the lambda runtime");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    serve(app, addr).await
}

async fn serve(app: Router, addr: std::net::SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("signal received, starting graceful shutdown");
}
