use crate::interface_adapters::protocol::{ClientMessage, ServerMessage};
use crate::use_cases::{ClientEvent, Selection};

use futures::{SinkExt, StreamExt};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{self, Message},
};
use tracing::{Instrument, debug, error, info, info_span, warn};

const LOG_THROTTLE: Duration = Duration::from_secs(2);

pub type GameSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug)]
pub enum ClientError {
    // Categorizes socket lifecycle failures so the caller can decide policy.
    #[allow(dead_code)]
    Ws(tungstenite::Error),
    #[allow(dead_code)]
    Serialization(serde_json::Error),
    ConnectTimeout,
    EventsClosed,
}

impl From<tungstenite::Error> for ClientError {
    fn from(e: tungstenite::Error) -> Self {
        ClientError::Ws(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e)
    }
}

enum LoopControl {
    Continue,
    Disconnect,
}

struct SocketStats {
    msgs_in: u64,
    msgs_out: u64,
    bytes_in: u64,
    bytes_out: u64,
    invalid_json: u32,
    last_invalid_log: Instant,
}

impl SocketStats {
    fn new() -> Self {
        Self {
            msgs_in: 0,
            msgs_out: 0,
            bytes_in: 0,
            bytes_out: 0,
            invalid_json: 0,
            last_invalid_log: Instant::now() - LOG_THROTTLE,
        }
    }
}

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

/// Opens the WebSocket to the game server.
pub async fn connect(url: &str, connect_timeout: Duration) -> Result<GameSocket, ClientError> {
    let (socket, response) = timeout(connect_timeout, connect_async(url))
        .await
        .map_err(|_| ClientError::ConnectTimeout)??;
    debug!(status = %response.status(), "game server handshake complete");
    Ok(socket)
}

async fn send_message<S>(
    socket: &mut WebSocketStream<S>,
    msg: &ClientMessage,
) -> Result<usize, ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let txt = serde_json::to_string(msg)?;
    let bytes = txt.len();
    socket.send(Message::Text(txt.into())).await?;
    Ok(bytes)
}

/// Drives one connection: decodes server pushes into events and sends
/// player selections back, until either side goes away.
pub async fn run_socket<S>(
    mut socket: WebSocketStream<S>,
    event_tx: mpsc::Sender<ClientEvent>,
    mut selection_rx: mpsc::Receiver<Selection>,
) -> Result<(), ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut stats = SocketStats::new();

    // Ask for the game flag up front so the view starts out correct.
    let sent = send_message(&mut socket, &ClientMessage::RequestGameState).await?;
    stats.msgs_out += 1;
    stats.bytes_out += sent as u64;

    let mut fatal: Option<ClientError> = None;

    loop {
        let control = tokio::select! {
            incoming = socket.next() => handle_incoming(incoming, &event_tx, &mut stats).await,

            selection = selection_rx.recv() => match selection {
                Some(selection) => forward_selection(&mut socket, selection, &mut stats).await,
                None => {
                    info!("selection channel closed; disconnecting");
                    Ok(LoopControl::Disconnect)
                }
            },
        };

        match control {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Disconnect) => break,
            Err(e) => {
                fatal = Some(e);
                break;
            }
        }
    }

    if let Err(err) = socket.close(None).await {
        debug!(error = ?err, "socket close error");
    }

    debug!(
        msgs_in = stats.msgs_in,
        msgs_out = stats.msgs_out,
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        invalid_json = stats.invalid_json,
        "socket stats"
    );

    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

async fn handle_incoming(
    incoming: Option<Result<Message, tungstenite::Error>>,
    event_tx: &mpsc::Sender<ClientEvent>,
    stats: &mut SocketStats,
) -> Result<LoopControl, ClientError> {
    match incoming {
        Some(Ok(msg)) => match msg {
            Message::Text(text) => {
                stats.msgs_in += 1;
                stats.bytes_in += text.len() as u64;

                match serde_json::from_str::<ServerMessage>(text.as_str()) {
                    Ok(msg) => {
                        event_tx
                            .send(msg.into())
                            .await
                            .map_err(|_| ClientError::EventsClosed)?;
                    }
                    Err(parse_err) => {
                        // Undecodable frames are skipped; the next push replaces the view anyway.
                        stats.invalid_json += 1;
                        if should_log(&mut stats.last_invalid_log) {
                            warn!(
                                bytes = text.len(),
                                error = %parse_err,
                                "failed to parse server message"
                            );
                        }
                    }
                }
                Ok(LoopControl::Continue)
            }
            Message::Binary(bytes) => {
                if should_log(&mut stats.last_invalid_log) {
                    warn!(bytes = bytes.len(), "binary message ignored");
                }
                Ok(LoopControl::Continue)
            }
            // tungstenite queues pong replies itself.
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => Ok(LoopControl::Continue),
            Message::Close(frame) => {
                info!(?frame, "game server closed the socket");
                Ok(LoopControl::Disconnect)
            }
        },
        Some(Err(e)) => Err(ClientError::Ws(e)),
        None => {
            info!("socket stream ended");
            Ok(LoopControl::Disconnect)
        }
    }
}

async fn forward_selection<S>(
    socket: &mut WebSocketStream<S>,
    selection: Selection,
    stats: &mut SocketStats,
) -> Result<LoopControl, ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    info!(option = %selection.option, "sending selection");
    let msg = ClientMessage::Select(selection.into());
    let bytes = send_message(socket, &msg).await?;
    stats.msgs_out += 1;
    stats.bytes_out += bytes as u64;
    Ok(LoopControl::Continue)
}

/// Connects to the game server and runs the socket until it closes.
pub async fn game_server_task(
    url: String,
    connect_timeout: Duration,
    event_tx: mpsc::Sender<ClientEvent>,
    selection_rx: mpsc::Receiver<Selection>,
) {
    let span = info_span!("socket", url = %url);

    async move {
        let socket = match connect(&url, connect_timeout).await {
            Ok(socket) => socket,
            Err(e) => {
                error!(error = ?e, "failed to connect to game server");
                return;
            }
        };
        info!("connected to game server");

        if let Err(e) = run_socket(socket, event_tx, selection_rx).await {
            warn!(error = ?e, "socket loop exited with error");
        }
        info!("disconnected from game server");
    }
    .instrument(span)
    .await
}
