//! Inventory API Library
//!
//! Categories, units of measure and the goods filed under them, served over
//! a REST API backed by a relational store.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod repositories;
pub mod store;
pub mod tracing;

use axum::Router;
use std::sync::Arc;
use tower_http::timeout::TimeoutLayer;

use crate::store::Store;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: config::AppConfig) -> Self {
        Self { store, config }
    }
}

/// Routes mounted under `/api/v1`
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", handlers::category_routes())
        .nest("/units", handlers::unit_routes())
        .nest("/goods", handlers::good_routes())
}

/// Full application router with the middleware stack applied
pub fn app_router(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();

    Router::new()
        .merge(handlers::health_routes())
        .nest("/api/v1", api_v1_routes())
        // Abandon requests that outlive the deadline; dropping the handler
        // future cancels the in-flight store call
        .layer(TimeoutLayer::new(request_timeout))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
