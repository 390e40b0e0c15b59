mod config;
mod routes;

use config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "carecompanion stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    let config = ServerConfig::from_env()?;
    let options = config.leptos_options()?;

    let app = routes::app(options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "carecompanion listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
