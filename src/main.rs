mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret, config.jwt_expiration_ms),
        config.jwt_header.clone(),
        config.jwt_prefix.clone(),
    );

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to bind {}: {}", config.bind_address, e))
        })?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::router(state, cors))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
