//! Receipt Processor HTTP API
//!
//! Accepts purchase receipts, files them under a generated identifier and
//! scores them for loyalty points on request.
//!
//! Routes:
//! - `POST /receipts/process` stores a receipt and returns `{"id": ...}`
//! - `GET /receipts/{id}/points` returns `{"points": ...}`
//!
//! Every other path answers `404` with a JSON error body.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use receipts_calculator::PointsCalculator;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod id_generator;
pub mod store;
pub mod tracing_setup;
pub mod types;

use id_generator::{IdGenerator, UuidIdGenerator};
use store::{InMemoryReceiptStore, ReceiptStore};

/// Request body limit used by [`create_app`].
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared handler state. Cloning is cheap; all members are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub store: Arc<dyn ReceiptStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub calculator: Arc<PointsCalculator>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// In-memory store, UUID identifiers and the built-in rules.
    pub fn new() -> Self {
        Self::with_components(Arc::new(InMemoryReceiptStore::new()), Arc::new(UuidIdGenerator))
    }

    pub fn with_components(store: Arc<dyn ReceiptStore>, ids: Arc<dyn IdGenerator>) -> Self {
        info!(stored = store.len(), "Initializing application state");
        Self { start_time: Utc::now(), store, ids, calculator: Arc::new(PointsCalculator::new()) }
    }

    pub fn elapsed(&self) -> Duration {
        (Utc::now() - self.start_time).to_std().unwrap_or_default()
    }
}

/// Router with fresh default state.
pub fn create_app() -> Router {
    create_app_with_state(AppState::new(), DEFAULT_MAX_BODY_BYTES)
}

pub fn create_app_with_state(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        .with_state(state)
}
