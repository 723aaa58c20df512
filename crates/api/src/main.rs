use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use santaverse_db::DbPool;
use santaverse_events::ChangeBus;
use santaverse_gateway::{GatewayConfig, RecommendationGateway};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use santaverse_api::config::ServerConfig;
use santaverse_api::realtime::ChangeFeed;
use santaverse_api::router::build_app_router;
use santaverse_api::state::AppState;
use santaverse_api::ws;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let pool = connect_database().await;

    // WebSocket registry and its keepalive.
    let ws_manager = Arc::new(ws::WsManager::new());
    let heartbeat_handle = ws::start_heartbeat(Arc::clone(&ws_manager));

    // Change bus plus the feed task that fans events out to sockets.
    let change_bus = Arc::new(ChangeBus::default());
    let change_feed = ChangeFeed::new(Arc::clone(&ws_manager));
    let feed_handle = tokio::spawn(change_feed.run(change_bus.subscribe()));
    tracing::info!("Change feed started");

    let gateway = Arc::new(RecommendationGateway::new(GatewayConfig::from_env()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::clone(&ws_manager),
        change_bus: Arc::clone(&change_bus),
        gateway,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Teardown order: close the bus so the feed task drains and exits,
    // then close sockets, then stop the heartbeat.
    tracing::info!("Server stopped accepting connections, cleaning up");

    drop(change_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), feed_handle).await;
    tracing::info!("Change feed shut down");

    ws_manager.shutdown_all().await;
    heartbeat_handle.abort();

    tracing::info!("Graceful shutdown complete");
}

/// Install the tracing subscriber; `RUST_LOG` overrides the default filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "santaverse_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to `DATABASE_URL`, verify reachability, and apply migrations.
///
/// Startup aborts on any failure here; the server is useless without its
/// database.
async fn connect_database() -> DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = santaverse_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    santaverse_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    santaverse_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database pool ready, migrations applied");
    pool
}

/// Resolve when the process receives SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
