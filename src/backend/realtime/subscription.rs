/**
 * Live-Update Subscription Handler
 *
 * This module implements the WebSocket endpoint `GET /ws`. Each upgraded
 * connection is registered with the `LiveRegistry` and then driven by two
 * tasks:
 *
 * - **writer**: drains the subscriber's outbound queue into the socket
 * - **reader**: consumes client frames; text is logged and otherwise ignored
 *
 * When either task finishes (client closed, socket error, failed write) the
 * other is aborted and the connection is unregistered. A connection that
 * silently stops reading stays registered until the transport reports it.
 */
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::realtime::broadcast::{LiveRegistry, LiveSubscription};

/// Handle a live-update subscription (GET /ws)
///
/// # Example Exchange
///
/// ```text
/// GET /ws HTTP/1.1
/// Connection: Upgrade
/// Upgrade: websocket
///
/// <- {"type":"CONNECTED","payload":{"message":"Connected to discussion forum WebSocket server"}}
/// <- {"type":"NEW_QUESTION","payload":{"id":6,...}}
/// ```
pub async fn handle_live_subscription(
    ws: WebSocketUpgrade,
    State(registry): State<LiveRegistry>,
) -> Response {
    tracing::info!("[Live] Subscription request received");
    ws.on_upgrade(move |socket| serve_subscriber(socket, registry))
}

async fn serve_subscriber(socket: WebSocket, registry: LiveRegistry) {
    let (mut sink, mut stream) = socket.split();
    let LiveSubscription { id, mut receiver } = registry.subscribe();

    let mut writer = tokio::spawn(async move {
        while let Some(text) = receiver.recv().await {
            if let Err(e) = sink.send(Message::Text(text.into())).await {
                tracing::warn!("[Live] Write to subscriber {} failed: {:?}", id, e);
                break;
            }
        }
    });

    let mut reader = tokio::spawn(async move {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    tracing::info!("[Live] Received message from {}: {}", id, text.as_str());
                }
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("[Live] Protocol error from subscriber {}: {:?}", id, e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut writer => reader.abort(),
        _ = &mut reader => writer.abort(),
    }

    registry.unregister(id);
    tracing::info!("[Live] Subscriber {} disconnected", id);
}
