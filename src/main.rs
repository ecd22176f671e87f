use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use travel_planner_backend::config::Config;
use travel_planner_backend::routes;
use travel_planner_backend::services::gemini::GeminiClient;
use travel_planner_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let generator = Arc::new(GeminiClient::new(&config)?);
    let state = Arc::new(AppState::new(generator, config.admin_key.clone()));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("travel planner running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
