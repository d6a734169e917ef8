// Shared fixtures: an in-process fake game server and a running client.
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::time::Duration;
use struggle_client::ClientSettings;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

// Start a fake game server that accepts one socket, pushes `pushes` in order,
// then reports every JSON message the client sends back.
pub async fn spawn_game_server(pushes: Vec<Value>) -> (String, mpsc::UnboundedReceiver<Value>) {
    let frames = pushes
        .into_iter()
        .map(|push| Message::Text(push.to_string().into()))
        .collect();
    spawn_scripted_game_server(frames).await
}

// Same as `spawn_game_server`, but sends raw frames so tests can include
// garbage, binary and close frames.
pub async fn spawn_scripted_game_server(
    frames: Vec<Message>,
) -> (String, mpsc::UnboundedReceiver<Value>) {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake game server");
    let addr = listener.local_addr().expect("get local addr");
    let (received_tx, received_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept client socket");
        let mut socket = tokio_tungstenite::accept_async(stream)
            .await
            .expect("websocket handshake");

        for frame in frames {
            socket.send(frame).await.expect("push to client");
        }

        // Keep the socket open and relay whatever the client sends.
        while let Some(Ok(msg)) = socket.next().await {
            if let Message::Text(text) = msg {
                if let Ok(value) = serde_json::from_str::<Value>(text.as_str()) {
                    let _ = received_tx.send(value);
                }
            }
        }
    });

    (format!("ws://{addr}"), received_rx)
}

// Start the client against `game_server_url` and return its HTTP base URL.
pub async fn spawn_client(game_server_url: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind client port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        struggle_client::run(
            listener,
            ClientSettings {
                game_server_url,
                connect_timeout: Duration::from_secs(2),
            },
        )
        .await
        .expect("client failed");
    });

    format!("http://{addr}")
}

// Poll `/game/log` until it equals `expected` or the retries run out.
pub async fn wait_for_log(client: &reqwest::Client, base_url: &str, expected: &str) -> String {
    let mut last = String::new();
    for _ in 0..100 {
        if let Ok(response) = client.get(format!("{base_url}/game/log")).send().await {
            last = response.text().await.unwrap_or_default();
            if last == expected {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    last
}

// Wait for the next message the fake server received from the client.
pub async fn next_received(received_rx: &mut mpsc::UnboundedReceiver<Value>) -> Value {
    tokio::time::timeout(Duration::from_secs(2), received_rx.recv())
        .await
        .expect("client message should arrive in time")
        .expect("fake game server should still be running")
}

// Poll `POST /game/select` until it answers `expected` or the retries run out.
pub async fn wait_for_select_status(
    client: &reqwest::Client,
    base_url: &str,
    option: &str,
    expected: reqwest::StatusCode,
) -> Option<reqwest::StatusCode> {
    let mut last = None;
    for _ in 0..100 {
        if let Ok(response) = client
            .post(format!("{base_url}/game/select"))
            .json(&serde_json::json!({ "option": option }))
            .send()
            .await
        {
            last = Some(response.status());
            if last == Some(expected) {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    last
}
