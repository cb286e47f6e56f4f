//! PropShare Core - API Server Binary
//!
//! This binary starts the HTTP API server for the investment core.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin propshare-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_WALLET_SERVICE_URL=https://... cargo run --bin propshare-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_CURRENCY` - Platform currency code (default: USD)
//! * `API_MIN_INVESTMENT` - Minimum investment amount (default: 500)
//! * `API_WALLET_SERVICE_URL` - External wallet ledger base URL; an
//!   in-memory wallet seeded for the demo investor is used when unset
//! * `API_UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::{ExternalServiceConfig, InvestorId, Money, PropertyId, Rate};
use domain_investment::InvestmentRegister;
use domain_returns::{ListingTerms, PenaltySchedule, PenaltyTier};
use domain_wallet::{AffordabilityPolicy, StaticWalletAdapter, WalletPort, WalletSnapshot};
use infra_remote::RemoteWalletAdapter;
use interface_api::catalog::{PropertyCatalog, PropertyListing};
use interface_api::{config::ApiConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        currency = %config.currency,
        "Starting PropShare Core API Server"
    );

    let state = build_state(config.clone()).await?;

    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables
///
/// Falls back to defaults if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or_else(|_| defaults.host.clone()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| defaults.log_level.clone()),
            wallet_service_url: std::env::var("API_WALLET_SERVICE_URL").ok(),
            currency: defaults.currency,
            min_investment: defaults.min_investment,
            upstream_timeout_secs: defaults.upstream_timeout_secs,
        }
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the application state: catalog, wallet source, and register
async fn build_state(config: ApiConfig) -> anyhow::Result<AppState> {
    let currency = config.currency;
    let default_investor = InvestorId::new_v7();

    let wallet: Arc<dyn WalletPort> = match &config.wallet_service_url {
        Some(url) => {
            tracing::info!(%url, "Using remote wallet ledger service");
            let service_config = ExternalServiceConfig::new(url.clone())
                .with_timeout_secs(config.upstream_timeout_secs);
            Arc::new(RemoteWalletAdapter::new(service_config)?)
        }
        None => {
            tracing::warn!(
                investor = %default_investor,
                "No wallet service configured; using an in-memory wallet"
            );
            let adapter = StaticWalletAdapter::new();
            adapter
                .seed(WalletSnapshot::new(
                    default_investor,
                    Money::new(dec!(100000), currency),
                ))
                .await;
            Arc::new(adapter)
        }
    };

    let catalog = PropertyCatalog::new(default_terms(currency)?);
    let register = Arc::new(RwLock::new(InvestmentRegister::new()));
    seed_listings(&catalog, &register, currency).await?;

    Ok(AppState {
        policy: AffordabilityPolicy::new(Money::new(config.min_investment, currency)),
        config,
        catalog: Arc::new(catalog),
        wallet,
        register,
        default_investor,
    })
}

/// Platform default terms used when a calculation names no property
fn default_terms(currency: core_kernel::Currency) -> anyhow::Result<ListingTerms> {
    Ok(ListingTerms::new(
        Money::new(dec!(1000), currency),
        1,
        10_000,
        Rate::from_percentage(dec!(8)),
        Rate::from_percentage(dec!(3)),
        5,
        Rate::from_percentage(dec!(10)),
    )?)
}

/// Seeds the demo listings served until a listing-management backend exists
async fn seed_listings(
    catalog: &PropertyCatalog,
    register: &Arc<RwLock<InvestmentRegister>>,
    currency: core_kernel::Currency,
) -> anyhow::Result<()> {
    let marina = PropertyListing {
        id: PropertyId::new_v7(),
        name: "Marina Heights Tower".to_string(),
        terms: ListingTerms::new(
            Money::new(dec!(1000), currency),
            5,
            2_000,
            Rate::from_percentage(dec!(8)),
            Rate::from_percentage(dec!(3)),
            5,
            Rate::from_percentage(dec!(10)),
        )?
        .with_graduated_penalties(PenaltySchedule::new(vec![
            PenaltyTier::new(1, dec!(10)),
            PenaltyTier::new(3, dec!(5)),
            PenaltyTier::new(5, dec!(0)),
        ])?),
    };

    let oasis = PropertyListing {
        id: PropertyId::new_v7(),
        name: "Oasis Business Park".to_string(),
        terms: ListingTerms::new(
            Money::new(dec!(500), currency),
            10,
            5_000,
            Rate::from_percentage(dec!(6.5)),
            Rate::from_percentage(dec!(4)),
            3,
            Rate::from_percentage(dec!(15)),
        )?,
    };

    for listing in [marina, oasis] {
        tracing::info!(property = %listing.id, name = %listing.name, "Seeded listing");
        register
            .write()
            .await
            .open_property(listing.id, listing.terms.available_units());
        catalog.insert(listing).await;
    }

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
