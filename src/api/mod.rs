//! HTTP surface: the stock data route, news and health endpoints, and the HTML pages.

mod error;
pub mod pages;
pub mod stock;

pub use error::ApiError;
pub use stock::{StockQuery, TimeRange};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::core::ChartService;
use crate::news::market_news;

/// Shared, read-only state behind every handler.
pub struct AppState {
    pub config: Config,
    pub charts: Arc<dyn ChartService>,
}

impl AppState {
    pub fn new(config: Config, charts: Arc<dyn ChartService>) -> Self {
        Self { config, charts }
    }
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    range_policy: &'static str,
    timestamp: i64,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::dashboard))
        .route("/chart", get(pages::chart_page))
        .route("/assets/widget-loader.js", get(pages::widget_loader))
        .route("/api/stock", get(stock::stock))
        .route("/api/news", get(news))
        .route("/api/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(Health {
        status: "ok",
        range_policy: state.config.chart.range_policy.as_str(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}

async fn news() -> impl IntoResponse {
    Json(market_news())
}
