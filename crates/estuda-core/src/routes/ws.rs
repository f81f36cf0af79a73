use axum::{
    extract::{Query, State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{auth, entities::response::WsEvent, error::AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    /// Bearer tokens cannot ride on a WebSocket upgrade from every client,
    /// so the stream authenticates via query parameter instead.
    pub token: String,
}

/// GET /api/stream/ws?token={jwt} - Per-user change event stream
pub async fn stream_ws(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = auth::validar_token(&query.token, &state.jwt_secret)?;

    Ok(ws.on_upgrade(move |socket| async move {
        if let Err(e) = handle_stream_ws(socket, state, user_id).await {
            tracing::warn!("Stream WebSocket closed: {}", e);
        }
    }))
}

async fn handle_stream_ws(
    socket: axum::extract::ws::WebSocket,
    state: AppState,
    user_id: Uuid,
) -> anyhow::Result<()> {
    let (mut sender, mut receiver) = socket.split();
    let mut event_rx = state.subscribe();

    // Send initial connected message
    let connected_msg = serde_json::to_string(&WsEvent::Connected)?;
    sender
        .send(axum::extract::ws::Message::Text(connected_msg.into()))
        .await?;

    // Drain incoming messages (ping/pong handling is automatic in axum)
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(_msg)) = receiver.next().await {}
    });

    // Forward events belonging to this user
    loop {
        match event_rx.recv().await {
            Ok(event) => {
                if event.user_id() != Some(user_id) {
                    continue;
                }

                let msg = serde_json::to_string(&event)?;
                if sender
                    .send(axum::extract::ws::Message::Text(msg.into()))
                    .await
                    .is_err()
                {
                    break; // Client disconnected
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("WebSocket client lagged by {} messages", n);
            }
            Err(broadcast::error::RecvError::Closed) => {
                break;
            }
        }
    }

    recv_task.abort();
    Ok(())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stream/ws", get(stream_ws))
}
