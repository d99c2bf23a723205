mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    startup::{self, connect_to_database, setup_tracing},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = Config::from_env()?;
    let db = connect_to_database(&config).await?;

    let listener = TcpListener::bind(config.address()).await?;
    tracing::info!("Listening on {}", config.address());

    axum::serve(listener, router::app(AppState::new(db.clone())))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
