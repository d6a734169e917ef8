// Wire protocol DTOs and conversions for the game server socket and the view routes.

use crate::domain::{CountryMapEntry, ProjectedViewState, Reps, ServerMovePayload, Side};
use crate::use_cases::{ClientEvent, Selection};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages the game server pushes over the WebSocket.
///
/// Decoded through [`RawServerMessage`] so that a missing, null, or
/// non-object `data` degrades to an empty payload instead of failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawServerMessage")]
pub enum ServerMessage {
    // Latest move/prompt for whoever is to act.
    ServerMove(ServerMoveDto),
    // Answer to a RequestGameState message.
    ServerRequestGameState(GameStateResponseDto),
}

/// `{"type": ..., "data": ...}` envelope before the payload is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawServerMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl TryFrom<RawServerMessage> for ServerMessage {
    type Error = String;

    fn try_from(raw: RawServerMessage) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "ServerMove" => {
                let dto = match raw.data {
                    data @ Value::Object(_) => {
                        serde_json::from_value(data).map_err(|e| e.to_string())?
                    }
                    _ => ServerMoveDto::default(),
                };
                Ok(ServerMessage::ServerMove(dto))
            }
            "ServerRequestGameState" => Ok(ServerMessage::ServerRequestGameState(
                GameStateResponseDto {
                    response: raw.data.get("response").cloned().unwrap_or_default(),
                },
            )),
            other => Err(format!("unknown message type `{other}`")),
        }
    }
}

/// Messages the client sends to the game server over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Asks whether a game is running; sent once after connecting.
    RequestGameState,
    // The player's pick for the active prompt.
    Select(SelectionDto),
}

/// Move payload as sent by the server.
///
/// Every field is optional and loosely typed; snake_case names are canonical
/// and camelCase is accepted as an alias.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerMoveDto {
    pub notification: Value,
    pub side: Value,
    #[serde(alias = "inputType")]
    pub input_type: Value,
    #[serde(alias = "currentSelection")]
    pub current_selection: Value,
    #[serde(alias = "selectedThisTurn")]
    pub selected_this_turn: Value,
    // `[label, count]`
    pub reps: Value,
    #[serde(alias = "availableOptions")]
    pub available_options: Value,
    #[serde(alias = "commitToken")]
    pub commit: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameStateResponseDto {
    pub response: Value,
}

// Render a loose JSON value as display text; null becomes empty.
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Whole numbers only; `1.0` and `"1"` count, `1.5` does not.
fn integer(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => return n.as_i64().or_else(|| whole(n.as_f64()?)),
        Value::String(s) => s.trim(),
        _ => return None,
    };
    number
        .parse::<i64>()
        .ok()
        .or_else(|| whole(number.parse::<f64>().ok()?))
}

fn whole(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

fn side(value: &Value) -> Option<Side> {
    integer(value).and_then(Side::from_code)
}

// `[label, count, ..]`; extra elements are ignored and a missing count is empty.
fn reps(value: &Value) -> Option<Reps> {
    let items = value.as_array()?;
    let label = items.first()?;
    Some(Reps {
        label: text(label),
        count: items.get(1).map(text).unwrap_or_default(),
    })
}

fn options(value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, label)| (key.clone(), text(label)))
            .collect(),
        _ => Vec::new(),
    }
}

impl From<ServerMoveDto> for ServerMovePayload {
    fn from(dto: ServerMoveDto) -> Self {
        Self {
            notification: text(&dto.notification),
            side: side(&dto.side),
            input_type: text(&dto.input_type),
            current_selection: text(&dto.current_selection),
            selected_this_turn: text(&dto.selected_this_turn),
            reps: reps(&dto.reps),
            available_options: options(&dto.available_options),
            commit: text(&dto.commit),
        }
    }
}

impl From<ServerMessage> for ClientEvent {
    fn from(msg: ServerMessage) -> Self {
        match msg {
            ServerMessage::ServerMove(dto) => ClientEvent::ServerMove(dto.into()),
            ServerMessage::ServerRequestGameState(dto) => ClientEvent::GameState {
                // Anything other than a literal `true` counts as no game.
                in_progress: dto.response.as_bool().unwrap_or(false),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionDto {
    pub option: String,
    pub commit: String,
}

impl From<Selection> for SelectionDto {
    fn from(selection: Selection) -> Self {
        Self {
            option: selection.option,
            commit: selection.commit,
        }
    }
}

/// Body of `POST /game/select`.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectRequest {
    #[serde(default)]
    pub option: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionDto {
    pub key: String,
    pub label: String,
}

/// Game view: the current projection flattened for the UI.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshotDto {
    pub game_in_progress: bool,
    pub game_log: String,
    pub notification: String,
    pub side: Option<u8>,
    pub side_prompt: String,
    pub input_type: String,
    pub current_selection: String,
    pub selected_this_turn: String,
    pub reps: String,
    pub available_options: Vec<OptionDto>,
    pub commit: String,
}

impl From<&ProjectedViewState> for ViewSnapshotDto {
    fn from(view: &ProjectedViewState) -> Self {
        Self {
            game_in_progress: view.game_in_progress,
            game_log: view.log_line.clone(),
            notification: view.notification.clone(),
            side: view.side.map(Side::code),
            side_prompt: view.side_prompt.clone(),
            input_type: view.input_type.clone(),
            current_selection: view.current_selection.clone(),
            selected_this_turn: view.selected_this_turn.clone(),
            reps: view.reps_line.clone(),
            available_options: view
                .available_options
                .iter()
                .map(|(key, label)| OptionDto {
                    key: key.clone(),
                    label: label.clone(),
                })
                .collect(),
            commit: view.commit.clone(),
        }
    }
}

/// Board placement of one country; `name` is omitted when the table has none.
#[derive(Debug, Clone, Serialize)]
pub struct CountryDto {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub x: i32,
    pub y: i32,
    pub opacity: f32,
}

impl From<&CountryMapEntry> for CountryDto {
    fn from(entry: &CountryMapEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            x: entry.x,
            y: entry.y,
            opacity: entry.opacity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewLinkDto {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeDto {
    pub views: Vec<ViewLinkDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDto {
    pub game_in_progress: bool,
    pub countries: Vec<CountryDto>,
}
