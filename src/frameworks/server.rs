// Framework bootstrap for the client runtime.

use crate::domain::ProjectedViewState;
use crate::frameworks::config;
use crate::interface_adapters::net::game_server_task;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::projector_task;

use std::net::SocketAddr;
use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::{mpsc, watch};

/// Where the client finds the game server.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub game_server_url: String,
    pub connect_timeout: Duration,
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self {
            game_server_url: config::game_server_url(),
            connect_timeout: config::game_server_connect_timeout(),
        }
    }
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, settings: ClientSettings) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(settings);
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, ClientSettings::from_env()).await
}

fn build_state(settings: ClientSettings) -> Arc<AppState> {
    // event_tx/rx: decoded server pushes flow into the single projector task.
    let (event_tx, event_rx) = mpsc::channel(config::EVENT_CHANNEL_CAPACITY);
    // view_tx/rx: latest projection, read by the view routes.
    let (view_tx, view_rx) = watch::channel(ProjectedViewState::default());
    // selection_tx/rx: player picks flow back out to the socket.
    let (selection_tx, selection_rx) = mpsc::channel(config::SELECTION_CHANNEL_CAPACITY);

    tokio::spawn(projector_task(event_rx, view_tx));

    tracing::debug!(
        game_server_url = %settings.game_server_url,
        connect_timeout_ms = settings.connect_timeout.as_millis(),
        "game server socket configured"
    );
    tokio::spawn(game_server_task(
        settings.game_server_url,
        settings.connect_timeout,
        event_tx,
        selection_rx,
    ));

    Arc::new(AppState {
        view_rx,
        selection_tx,
    })
}
