// src/main.rs

use std::env;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

mod cache;
mod content;
mod db;
mod format;
mod models;
mod queries;
mod routes;

use cache::QueryCache;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub cache: Arc<QueryCache>,
    pub bi_report_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Initialize DB pool and the query memo
    let pool = db::connect().await?;
    let ttl_secs: u64 = env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300);
    let cache = Arc::new(QueryCache::new(Duration::from_secs(ttl_secs)));

    let bi_report_url =
        env::var("BI_REPORT_URL").unwrap_or_else(|_| content::DEFAULT_BI_REPORT_URL.to_owned());
    let images_dir = env::var("IMAGES_DIR").unwrap_or_else(|_| "images".to_owned());

    let state = AppState {
        pool,
        cache,
        bi_report_url,
    };

    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // dashboard pages
        .route("/", get(routes::pages::index))
        .route("/sections/:slug", get(routes::pages::section))
        // health
        .route("/health", get(routes::health::health))
        // KPI JSON API
        .route("/api/v1/kpi/summary", get(routes::kpi::summary))
        .route(
            "/api/v1/kpi/payment-methods",
            get(routes::kpi::payment_methods),
        )
        .route("/api/v1/kpi/top-customers", get(routes::kpi::top_customers))
        .route(
            "/api/v1/kpi/vehicle-ratings",
            get(routes::kpi::vehicle_ratings),
        )
        // BI report screenshots
        .nest_service("/images", ServeDir::new(images_dir))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Port (axum 0.7 style)
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ttl_secs, "dashboard listening");

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
