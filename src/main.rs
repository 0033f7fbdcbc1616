use anyhow::Context;
use tower_http::cors::CorsLayer;

use loanmate_backend::config::AppConfig;
use loanmate_backend::routes::create_router;
use loanmate_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loanmate_backend=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr();
    let state = AppState::new(&config).context("failed to initialize the generation client")?;

    let cors = CorsLayer::very_permissive();
    let app = create_router().with_state(state).layer(cors);

    tracing::info!(
        "loanmate-backend v{} listening on {bind_addr}",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
