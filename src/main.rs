use axum::routing::{get, post};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use ticket_payments::config::AppConfig;
use ticket_payments::providers::bkash::BkashProvider;
use ticket_payments::providers::{PaymentProvider, ThreadRngReferences};
use ticket_payments::repo::orders_repo::OrdersRepo;
use ticket_payments::service::order_service::OrderService;
use ticket_payments::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let orders_repo = OrdersRepo { pool: pool.clone() };
    let provider: Arc<dyn PaymentProvider> = Arc::new(BkashProvider {
        config: cfg.bkash.clone(),
        client: reqwest::Client::new(),
        references: Arc::new(ThreadRngReferences),
    });

    if cfg.bkash.base_url.is_none() {
        tracing::info!("no BKASH_BASE_URL configured, provider runs in simulation mode");
    }

    let order_service = OrderService {
        orders_repo: orders_repo.clone(),
        provider,
    };

    let state = AppState {
        order_service,
        orders_repo,
    };

    let app = Router::new()
        .route("/health", get(ticket_payments::http::handlers::orders::health))
        .route("/api/pay", post(ticket_payments::http::handlers::orders::pay))
        .route(
            "/api/order/:id",
            get(ticket_payments::http::handlers::orders::get_order),
        )
        .route(
            "/api/admin/orders",
            get(ticket_payments::http::handlers::admin::list_orders),
        )
        .route(
            "/api/admin/order/:id/mark-paid",
            post(ticket_payments::http::handlers::admin::mark_paid),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
