use crate::domain::ProjectedViewState;
use crate::use_cases::Selection;
use tokio::sync::{mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Latest projection published by the projector task.
    pub view_rx: watch::Receiver<ProjectedViewState>,
    // Player selections waiting to go out over the game server socket.
    pub selection_tx: mpsc::Sender<Selection>,
}
