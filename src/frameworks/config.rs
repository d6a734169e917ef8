use std::{env, time::Duration};

// Runtime constants for the client process.

pub fn http_port() -> u16 {
    env::var("STRUGGLE_CLIENT_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
}

pub fn game_server_url() -> String {
    env::var("GAME_SERVER_URL").unwrap_or_else(|_| "ws://127.0.0.1:5000/ws".to_string())
}

pub fn game_server_connect_timeout() -> Duration {
    let millis = env::var("GAME_SERVER_CONNECT_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

pub const EVENT_CHANNEL_CAPACITY: usize = 256;
pub const SELECTION_CHANNEL_CAPACITY: usize = 16;
