//! Inventory Management API
//!
//! Products, raw materials and the bill of materials linking them, plus a
//! production planner that ranks what current stock can make by value.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Resource routes, unlayered
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", handlers::products::product_routes())
        .nest("/rawmaterials", handlers::raw_materials::raw_material_routes())
        .nest(
            "/productrawmaterials",
            handlers::product_raw_materials::product_raw_material_routes(),
        )
        .nest("/production", handlers::production::production_routes())
        .nest("/health", handlers::health::health_routes())
}

/// Full application router with Swagger UI, request ids and HTTP tracing.
/// Deployment concerns (CORS, timeouts, compression) are layered on by the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
