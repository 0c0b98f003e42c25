//! HTTP API application wiring (Axum router + shared query service).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query-string parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use invoicelens_invoicing::InvoiceQueryService;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The service is built before this is called and is only read afterwards.
pub fn build_app(service: Arc<InvoiceQueryService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log_middleware))
                .layer(axum::middleware::from_fn(middleware::cors_middleware))
                .layer(Extension(service)),
        )
}
