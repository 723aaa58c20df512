use std::sync::Arc;

use santaverse_events::ChangeBus;
use santaverse_gateway::RecommendationGateway;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: santaverse_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (dashboard clients).
    pub ws_manager: Arc<WsManager>,
    /// Change bus feeding the realtime change feed.
    pub change_bus: Arc<ChangeBus>,
    /// AI recommendation gateway client.
    pub gateway: Arc<RecommendationGateway>,
}
