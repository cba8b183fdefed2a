use quora_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::cors::api_cors,
    routes,
    utils::token::TokenIssuer,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    init_tracing();
    let config = get_config()?;

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl_hours);
    let app_state = AppState::new(pool, tokens);

    let app = routes::api_router()
        .with_state(app_state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quora_backend=debug,tower_http=info"));
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
