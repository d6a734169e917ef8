// Use-case level inputs/outputs for the projection loop.

use crate::domain::ServerMovePayload;

/// Typed events delivered by the socket adapter, in arrival order.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    ServerMove(ServerMovePayload),
    GameState { in_progress: bool },
}

/// An option picked by the player, tagged with the commit token it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub option: String,
    pub commit: String,
}
