//! Route modules for the payoff server
//!
//! This module contains endpoint group-specific routers:
//! - payoff: payoff curve calculation
//! - strategies: saved-strategy CRUD
//! - health: health check and readiness endpoints

pub mod health;
pub mod payoff;
pub mod strategies;

use axum::http::HeaderValue;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_store::{InMemoryStrategyStore, StrategyStore};
use payoff_engine::curve::CurveBuilder;

use crate::config::ServerConfig;

/// Error payload returned by every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Curve builder carrying the configured scan window
    pub builder: Arc<CurveBuilder>,
    /// Saved-strategy store
    pub store: Arc<dyn StrategyStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState with an empty in-memory store.
    ///
    /// The grid section of the configuration must already be validated;
    /// an invalid one falls back to the default scan window.
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let builder = CurveBuilder::new(config.grid.clone())
            .unwrap_or_else(|_| CurveBuilder::with_defaults());
        Self {
            config,
            builder: Arc::new(builder),
            store: Arc::new(InMemoryStrategyStore::new()),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    let cors = match state.config.cors_allow_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::permissive(),
    };

    Router::new()
        .merge(health::routes())
        .merge(payoff::routes())
        .merge(strategies::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
