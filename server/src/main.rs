#![recursion_limit = "256"]

mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.resend.is_none() {
        tracing::warn!("RESEND_API_KEY not set; magic links will not be mailed");
    }
    if config.github.is_none() {
        tracing::warn!("GitHub OAuth not configured; GitHub sign-in disabled");
    }

    let state = state::AppState::new(pool, &config);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chatkeep listening");
    axum::serve(listener, app).await.expect("server failed");
}
