// Interface adapters: wire protocol, game server socket, and view routes.

pub mod http;
pub mod net;
pub mod protocol;
pub mod routes;
pub mod state;
