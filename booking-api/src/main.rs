use std::net::SocketAddr;
use std::sync::Arc;

use booking_api::{app, AppState};
use booking_core::InMemoryTicketStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = booking_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Booking API on port {}", config.server.port);

    let store = Arc::new(InMemoryTicketStore::new());
    let app_state = AppState::new(store);

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
