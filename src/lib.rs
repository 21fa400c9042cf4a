//! A deliberately vulnerable coffee-ordering demo.
//!
//! The server keeps orders in process memory and exposes a tiny API that a
//! bundled static page talks to. Input is stored and echoed back unescaped
//! (persistent and reflected XSS), order placement works over a plain GET
//! (CSRF via `<img>` tags), and the CORS policy is wildly permissive. Do not
//! borrow anything here for a real service.
//!
//! Run it and open <http://localhost:3000>:
//! ```sh
//! cargo run
//! ```
//!
//! `PORT` and `PUBLIC_DIR` override the listen port and static root.

use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{self, CONTENT_TYPE},
    },
    routing::get,
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod orders;
pub mod routes;
pub mod state;

use routes::{clear_orders_handler, order_body_handler, order_query_handler, orders_handler};
pub use state::AppState;

/// Lets scripts and styles come from self plus one CDN, with inline execution
/// still allowed. Tight enough to not break the page, loose enough to not
/// stop the demo payloads.
const CSP: &str = "default-src 'self'; script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; connect-src 'self'; img-src 'self' data:;";

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/orders", get(orders_handler))
        .route(
            "/api/order",
            get(order_query_handler).post(order_body_handler),
        )
        .route("/api/clear-orders", get(clear_orders_handler))
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(cors)
        // The original pairs a wildcard origin with credentials enabled, a
        // combination browsers reject and `CorsLayer` refuses to build. The
        // credentials header is stacked separately so the contradictory pair
        // still appears on the wire as documented.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-example"),
            HeaderValue::from_static("this is a new custom header"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CSP),
        ))
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("App running at http://localhost:{}", state.config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
