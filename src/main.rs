//! SkillBridge backend entrypoint.
//!
//! Loads configuration, wires adapters to the application layer, and serves
//! the REST API until SIGINT/SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use secrecy::SecretString;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use skillbridge::adapters::email::{LogNotifier, ResendNotifier};
use skillbridge::adapters::http::{
    admin_routes, catalog_routes, orders_routes, AdminAppState, CatalogAppState, OrdersAppState,
};
use skillbridge::adapters::postgres::{
    PostgresEnrollmentLedger, PostgresPaymentRecordRepository, PostgresUserDirectory,
};
use skillbridge::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use skillbridge::application::CheckoutMode;
use skillbridge::config::AppConfig;
use skillbridge::domain::catalog::PackageCatalog;
use skillbridge::domain::payment::CallbackVerifier;
use skillbridge::ports::EnrollmentNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    config.validate()?;

    // Database pool
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Adapters
    let catalog = Arc::new(PackageCatalog::standard());
    let repository = Arc::new(PostgresPaymentRecordRepository::new(pool.clone()));
    let ledger = Arc::new(PostgresEnrollmentLedger::new(pool.clone()));
    let users = Arc::new(PostgresUserDirectory::new(pool.clone()));

    let notifier: Arc<dyn EnrollmentNotifier> = if config.email.is_enabled() {
        Arc::new(ResendNotifier::new(
            SecretString::new(config.email.resend_api_key.clone()),
            config.email.from_header(),
        ))
    } else {
        warn!("RESEND_API_KEY not set; enrollment emails will only be logged");
        Arc::new(LogNotifier)
    };

    // Checkout mode is fixed at startup: either every order goes through the
    // gateway, or every order takes the mock path.
    let checkout = if config.use_mock_checkout() {
        warn!("Gateway credentials absent; serving mock checkout");
        CheckoutMode::Mock
    } else {
        info!(key_id = %config.gateway.key_id, "Gateway checkout enabled");
        CheckoutMode::Gateway(Arc::new(RazorpayGateway::new(RazorpayConfig::new(
            config.gateway.key_id.clone(),
            config.gateway.key_secret.clone(),
        ))))
    };

    let verifier = Arc::new(CallbackVerifier::new(config.gateway.key_secret.clone()));

    let orders_state = OrdersAppState {
        catalog: catalog.clone(),
        repository: repository.clone(),
        ledger: ledger.clone(),
        users: users.clone(),
        notifier: notifier.clone(),
        verifier,
        checkout,
        currency: config.gateway.currency.clone(),
    };

    let admin_state = AdminAppState {
        catalog: catalog.clone(),
        repository,
        ledger,
        users,
        notifier,
        currency: config.gateway.currency.clone(),
    };

    let catalog_state = CatalogAppState { catalog };

    // The dev confirm route never exists in production.
    let dev_confirm_enabled = !config.is_production();
    if dev_confirm_enabled {
        info!("Dev confirm endpoint enabled");
    }

    let cors = build_cors_layer(&config)?;

    let app = Router::new()
        .nest(
            "/api/packages",
            catalog_routes().with_state(catalog_state),
        )
        .nest(
            "/api/orders",
            orders_routes(dev_confirm_enabled).with_state(orders_state),
        )
        .nest("/api/admin", admin_routes().with_state(admin_state))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    info!("SkillBridge listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

fn build_cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install signal handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
