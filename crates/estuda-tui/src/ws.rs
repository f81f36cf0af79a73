use anyhow::Result;
use futures_util::{stream::StreamExt, SinkExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::models::WsEvent;

/// Background task that keeps the change-stream connection open and forwards
/// server events to the app over a channel.
pub struct StreamClient {
    _task_handle: tokio::task::JoinHandle<()>,
}

impl StreamClient {
    /// Connect to the authenticated stream URL (see `ApiClient::stream_ws_url`).
    pub fn connect(url: &str, event_tx: mpsc::UnboundedSender<WsEvent>) -> Self {
        let url = url.to_string();
        Self {
            _task_handle: tokio::spawn(async move {
                if let Err(e) = Self::run(&url, event_tx).await {
                    tracing::error!("WebSocket error: {}", e);
                }
            }),
        }
    }

    async fn run(url: &str, event_tx: mpsc::UnboundedSender<WsEvent>) -> Result<()> {
        let (ws_stream, _) = connect_async(url).await?;
        tracing::info!("WebSocket connected");

        let (mut sender, mut read) = ws_stream.split();

        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<WsEvent>(&text) {
                        if matches!(event, WsEvent::Ping) {
                            let pong = serde_json::to_string(&WsEvent::Pong)?;
                            sender.send(Message::Text(pong.into())).await?;
                            continue;
                        }
                        let _ = event_tx.send(event);
                    } else {
                        tracing::warn!("Failed to parse WebSocket message: {}", text);
                    }
                }
                Ok(Message::Ping(data)) => {
                    sender.send(Message::Pong(data)).await?;
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("WebSocket connection closed");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }
}
