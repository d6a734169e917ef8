use super::types::ClientEvent;
use crate::domain::{ProjectedViewState, ServerMovePayload, project};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// Holds the projection of the latest server move.
///
/// Each move replaces the whole view; only `game_in_progress` survives.
#[derive(Debug, Default)]
pub struct GameStateProjector {
    view: ProjectedViewState,
}

impl GameStateProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_server_move(&mut self, payload: &ServerMovePayload) -> &ProjectedViewState {
        debug!(?payload, "server move");
        self.view = project(payload, self.view.game_in_progress);
        &self.view
    }

    pub fn apply_game_state_response(&mut self, in_progress: bool) {
        self.view.game_in_progress = in_progress;
    }

    pub fn game_in_progress(&self) -> bool {
        self.view.game_in_progress
    }

    /// Joined log text for the current projection (empty before any move).
    pub fn game_log(&self) -> &str {
        &self.view.log_line
    }

    pub fn view(&self) -> &ProjectedViewState {
        &self.view
    }
}

/// Applies inbound events one at a time and publishes each resulting view.
pub async fn projector_task(
    mut event_rx: mpsc::Receiver<ClientEvent>,
    view_tx: watch::Sender<ProjectedViewState>,
) {
    let mut projector = GameStateProjector::new();

    while let Some(event) = event_rx.recv().await {
        match event {
            ClientEvent::ServerMove(payload) => {
                projector.apply_server_move(&payload);
            }
            ClientEvent::GameState { in_progress } => {
                info!(in_progress, "game state response");
                projector.apply_game_state_response(in_progress);
            }
        }

        // Readers may come and go; always keep the latest view stored.
        view_tx.send_replace(projector.view().clone());
    }

    info!("event channel closed; projector exiting");
}
