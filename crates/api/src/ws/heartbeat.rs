use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

/// Seconds between heartbeat pings.
const HEARTBEAT_INTERVAL_SECS: u64 = 30;

/// Spawn the heartbeat task: a Ping frame to every open connection each
/// interval, so intermediaries keep idle feed sockets alive and dead peers
/// surface as send errors.
///
/// Runs for the life of the server; abort the returned handle on shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS));

        loop {
            interval.tick().await;
            let count = ws_manager.connection_count().await;
            if count == 0 {
                continue;
            }
            tracing::debug!(count, "WebSocket heartbeat ping");
            ws_manager.ping_all().await;
        }
    })
}
