//! HTTP API Layer
//!
//! This crate provides the REST API for the investment core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: calculation, investment submission, wallet balance
//! - **Catalog**: in-memory property listings resolving terms per property
//! - **Middleware**: request tracing and audit logging
//! - **DTOs**: camelCase request/response objects matching the wire contracts
//! - **Error Handling**: `{"success": false, "message": ...}` envelopes with
//!   rejection messages kept verbatim
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod catalog;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::InvestorId;
use domain_investment::InvestmentRegister;
use domain_wallet::{AffordabilityPolicy, WalletPort};

use crate::catalog::PropertyCatalog;
use crate::config::ApiConfig;
use crate::handlers::{health, investments, returns, wallet};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub catalog: Arc<PropertyCatalog>,
    pub wallet: Arc<dyn WalletPort>,
    pub register: Arc<RwLock<InvestmentRegister>>,
    pub policy: AffordabilityPolicy,
    pub default_investor: InvestorId,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no audit trail needed)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Calculation routes
    let returns_routes = Router::new().route("/calculate", post(returns::calculate_returns));

    // Investment routes
    let investment_routes = Router::new().route("/", post(investments::create_investment));

    // Wallet routes
    let wallet_routes = Router::new().route("/balance", get(wallet::wallet_balance));

    let api_routes = Router::new()
        .nest("/returns", returns_routes)
        .nest("/investments", investment_routes)
        .nest("/wallet", wallet_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
