//! CRM Lite: role-specific sales and inventory dashboards over a SQLite database.

pub mod chart;
pub mod config;
pub mod database;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use config::Config;
use database::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.reporting.static_dir.clone();

    Router::new()
        .route("/", get(handlers::index).post(handlers::index))
        .route("/identify", get(handlers::identify).post(handlers::identify))
        .route("/health", get(handlers::health_check))
        // Static files, including the generated charts
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
