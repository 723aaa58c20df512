use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use serde::Deserialize;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::AppState;
use crate::ws::manager::WsManager;

/// Query parameters accepted by the WebSocket upgrade endpoint.
///
/// Browsers cannot set an `Authorization` header on a WebSocket handshake,
/// so the access token travels as a query parameter instead.
#[derive(Debug, Deserialize)]
pub struct WsParams {
    token: String,
}

/// HTTP handler that authenticates and upgrades the connection to WebSocket.
///
/// The token is checked before the upgrade completes; an invalid token is a
/// plain 401 and no socket is opened. Afterwards the connection is
/// registered under the authenticated owner and serviced until either side
/// closes it.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<WsParams>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let claims = verify_access_token(&params.token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(ws.on_upgrade(move |socket| serve_socket(socket, state.ws_manager, claims.sub)))
}

/// Service one WebSocket connection until it closes.
///
/// The socket splits into a sink and a stream. A spawned task drains the
/// manager channel into the sink; the current task consumes inbound frames,
/// which for this push-only feed are just lifecycle traffic (Pong, Close).
async fn serve_socket(socket: WebSocket, ws_manager: Arc<WsManager>, owner_id: DbId) {
    let (conn_id, mut rx) = ws_manager.add(owner_id).await;
    tracing::info!(conn_id = %conn_id, owner_id, "WebSocket connected");

    let (mut sink, mut stream) = socket.split();

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                break;
            }
        }
    });

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_other) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    ws_manager.remove(owner_id, conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, owner_id, "WebSocket disconnected");
}
